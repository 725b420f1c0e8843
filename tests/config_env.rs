// tests/config_env.rs
use std::{env, fs};

use text_sentiment_analyzer::config::{
    AnalyzerConfig, DEFAULT_BIND, DEFAULT_HISTORY_CAP, ENV_BIND, ENV_CONFIG_PATH,
    ENV_DEFAULT_METHOD, ENV_HISTORY_CAP, ENV_LEXICON_PATH, ENV_STOPWORDS_PATH,
};
use text_sentiment_analyzer::{Analyzer, Method, Resources};

const ALL_VARS: [&str; 6] = [
    ENV_CONFIG_PATH,
    ENV_DEFAULT_METHOD,
    ENV_STOPWORDS_PATH,
    ENV_LEXICON_PATH,
    ENV_HISTORY_CAP,
    ENV_BIND,
];

fn clear_env() {
    for k in ALL_VARS {
        env::remove_var(k);
    }
}

/// Run `f` from inside a fresh temp dir so the repo's own `config/` is not read.
fn in_temp_cwd<F: FnOnce(&std::path::Path)>(f: F) {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    f(tmp.path());

    clear_env();
    env::set_current_dir(old).unwrap();
}

#[serial_test::serial]
#[test]
fn defaults_without_file_or_env() {
    in_temp_cwd(|_| {
        let cfg = AnalyzerConfig::load().unwrap();
        assert_eq!(cfg, AnalyzerConfig::default());
        assert_eq!(cfg.default_method, Method::Both);
        assert_eq!(cfg.history_cap, DEFAULT_HISTORY_CAP);
        assert_eq!(cfg.bind, DEFAULT_BIND);
    });
}

#[serial_test::serial]
#[test]
fn default_file_then_env_overrides() {
    in_temp_cwd(|dir| {
        // 1) Fallback TOML in ./config/
        fs::create_dir_all(dir.join("config")).unwrap();
        fs::write(
            dir.join("config/analyzer.toml"),
            "default_method = \"vader\"\nhistory_cap = 7\n",
        )
        .unwrap();
        let cfg = AnalyzerConfig::load().unwrap();
        assert_eq!(cfg.default_method, Method::Vader);
        assert_eq!(cfg.history_cap, 7);

        // 2) ENV wins over the file
        env::set_var(ENV_DEFAULT_METHOD, " TextBlob ");
        env::set_var(ENV_HISTORY_CAP, "0");
        env::set_var(ENV_BIND, "0.0.0.0:9000");
        let cfg = AnalyzerConfig::load().unwrap();
        assert_eq!(cfg.default_method, Method::TextBlob);
        assert_eq!(cfg.history_cap, 1, "cap is clamped to at least one");
        assert_eq!(cfg.bind, "0.0.0.0:9000");

        // 3) Blank values are ignored
        env::set_var(ENV_DEFAULT_METHOD, "   ");
        let cfg = AnalyzerConfig::load().unwrap();
        assert_eq!(cfg.default_method, Method::Vader);
    });
}

#[serial_test::serial]
#[test]
fn explicit_config_path_must_exist() {
    in_temp_cwd(|dir| {
        env::set_var(ENV_CONFIG_PATH, dir.join("missing.toml"));
        let err = AnalyzerConfig::load().unwrap_err();
        assert!(format!("{err:#}").contains(ENV_CONFIG_PATH));

        let p = dir.join("custom.toml");
        fs::write(&p, "bind = \"127.0.0.1:1\"").unwrap();
        env::set_var(ENV_CONFIG_PATH, &p);
        assert_eq!(AnalyzerConfig::load().unwrap().bind, "127.0.0.1:1");
    });
}

#[serial_test::serial]
#[test]
fn invalid_env_values_fail_loudly() {
    in_temp_cwd(|_| {
        env::set_var(ENV_DEFAULT_METHOD, "bert");
        assert!(AnalyzerConfig::load().is_err());
        env::remove_var(ENV_DEFAULT_METHOD);

        env::set_var(ENV_HISTORY_CAP, "lots");
        let err = AnalyzerConfig::load().unwrap_err();
        assert!(format!("{err:#}").contains(ENV_HISTORY_CAP));
    });
}

#[serial_test::serial]
#[test]
fn resource_overrides_change_analysis() {
    in_temp_cwd(|dir| {
        // Custom stopword table: "love" becomes a stopword.
        let sw = dir.join("stopwords.txt");
        fs::write(&sw, "# tiny table\nlove\ni\n").unwrap();
        // Custom lexicon: "meh" is strongly negative.
        let lx = dir.join("lexicon.json");
        fs::write(
            &lx,
            r#"{"words": {"meh": [-0.9, 0.8]}, "intensifiers": {}, "negators": ["not"]}"#,
        )
        .unwrap();

        env::set_var(ENV_STOPWORDS_PATH, &sw);
        env::set_var(ENV_LEXICON_PATH, &lx);
        let cfg = AnalyzerConfig::load().unwrap();
        let analyzer = Analyzer::new(Resources::load(&cfg).unwrap());

        let r = analyzer.analyze_with("I love meh", Method::TextBlob);
        assert_eq!(r.statistics().total_words, 3);
        assert_eq!(r.statistics().filtered_words, 1);
        let t = r.textblob().unwrap();
        assert!((t.polarity + 0.9).abs() < 1e-9, "{t:?}");
    });
}

#[serial_test::serial]
#[test]
fn missing_resource_file_fails_fast() {
    in_temp_cwd(|dir| {
        env::set_var(ENV_LEXICON_PATH, dir.join("nope.json"));
        let cfg = AnalyzerConfig::load().unwrap();
        assert!(Resources::load(&cfg).is_err());
    });
}
