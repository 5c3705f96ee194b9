// tests/config_env.rs
// These tests mutate process env vars; `serial_test` keeps them exclusive.

use std::env;

use lk_trend_agent::config::{AgentConfig, DEFAULT_GEMINI_MODEL};
use lk_trend_agent::error::AgentError;
use serial_test::serial;

/// RAII guard that applies env overrides and restores the previous state on
/// drop, so each test leaves the process env as it found it.
struct EnvSnapshot {
    saved: Vec<(String, Option<String>)>,
}
impl EnvSnapshot {
    /// (KEY, Some(VALUE)) sets a variable, (KEY, None) removes it.
    fn set(pairs: &[(&str, Option<&str>)]) -> Self {
        let mut saved = Vec::with_capacity(pairs.len());
        for (k, v) in pairs {
            let key = k.to_string();
            let prev = env::var(k).ok();
            saved.push((key.clone(), prev));
            match v {
                Some(val) => env::set_var(&key, val),
                None => env::remove_var(&key),
            }
        }
        Self { saved }
    }
}
impl Drop for EnvSnapshot {
    fn drop(&mut self) {
        for (k, maybe_v) in self.saved.drain(..) {
            match maybe_v {
                Some(v) => env::set_var(&k, v),
                None => env::remove_var(&k),
            }
        }
    }
}

fn full_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("GEMINI_API_KEY", Some("k-123")),
        ("GEMINI_MODEL", None),
        ("SMTP_HOST", Some("smtp.example.com")),
        ("SMTP_PORT", None),
        ("SMTP_USER", Some("agent@example.com")),
        ("SMTP_PASS", Some("hunter2")),
        ("TO_EMAIL", Some("owner@example.com")),
        ("FROM_EMAIL", None),
    ]
}

#[test]
#[serial]
fn defaults_fill_model_port_and_sender() {
    let _env = EnvSnapshot::set(&full_env());
    let cfg = AgentConfig::from_env().expect("config should load");
    assert_eq!(cfg.gemini_model, DEFAULT_GEMINI_MODEL);
    assert_eq!(cfg.smtp_port, 587);
    assert_eq!(cfg.from_email, cfg.smtp_user);
}

#[test]
#[serial]
fn explicit_values_override_the_defaults() {
    let mut pairs = full_env();
    for (k, v) in pairs.iter_mut() {
        match *k {
            "GEMINI_MODEL" => *v = Some("gemini-2.0-pro"),
            "SMTP_PORT" => *v = Some("2525"),
            "FROM_EMAIL" => *v = Some("reports@example.com"),
            _ => {}
        }
    }
    let _env = EnvSnapshot::set(&pairs);

    let cfg = AgentConfig::from_env().expect("config should load");
    assert_eq!(cfg.gemini_model, "gemini-2.0-pro");
    assert_eq!(cfg.smtp_port, 2525);
    assert_eq!(cfg.from_email, "reports@example.com");
    assert_eq!(cfg.to_email, "owner@example.com");
}

#[test]
#[serial]
fn every_required_var_is_enforced() {
    for missing in ["GEMINI_API_KEY", "SMTP_HOST", "SMTP_USER", "SMTP_PASS", "TO_EMAIL"] {
        let mut pairs = full_env();
        for (k, v) in pairs.iter_mut() {
            if *k == missing {
                *v = None;
            }
        }
        let _env = EnvSnapshot::set(&pairs);

        match AgentConfig::from_env() {
            Err(AgentError::Config(name)) => assert_eq!(name, missing),
            other => panic!("expected Config({missing}), got {other:?}"),
        }
    }
}

#[test]
#[serial]
fn blank_required_var_counts_as_missing() {
    let mut pairs = full_env();
    for (k, v) in pairs.iter_mut() {
        if *k == "SMTP_HOST" {
            *v = Some("   ");
        }
    }
    let _env = EnvSnapshot::set(&pairs);

    match AgentConfig::from_env() {
        Err(AgentError::Config(name)) => assert_eq!(name, "SMTP_HOST"),
        other => panic!("expected Config(SMTP_HOST), got {other:?}"),
    }
}

#[test]
#[serial]
fn malformed_port_is_a_config_value_error() {
    let mut pairs = full_env();
    for (k, v) in pairs.iter_mut() {
        if *k == "SMTP_PORT" {
            *v = Some("not-a-port");
        }
    }
    let _env = EnvSnapshot::set(&pairs);

    match AgentConfig::from_env() {
        Err(AgentError::ConfigValue(name, _)) => assert_eq!(name, "SMTP_PORT"),
        other => panic!("expected ConfigValue(SMTP_PORT), got {other:?}"),
    }
}
