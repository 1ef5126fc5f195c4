//! End-to-end scenarios for scoped configuration
//!
//! These tests exercise the complete flow: base configuration -> child
//! builder with environments -> resolved snapshot -> logger output.

use conf_core::{
    Builder, Configuration, LoggerSource, Severity, SharedLogger, StreamLogger, TracingLogger,
};
use conf_test_utils::{RecordingLogger, SharedBuffer};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Deserialize, PartialEq)]
struct Database {
    host: String,
    pool: u32,
}

/// Organisation-wide defaults every service starts from.
fn organisation() -> Configuration {
    Builder::define(None, |b| {
        b.set("app_path", "/app")
            .set("app_name", "BaseApp")
            .set("database", json!({"host": "localhost", "pool": 5}));
        Ok(())
    })
    .unwrap()
    .build("production")
}

#[test]
fn environment_selects_overlay() {
    let builder = Builder::define(None, |b| {
        b.set("app_name", "MyApp");
        b.environment("development", |env| {
            env.set("app_name", "YourApp");
        });
        Ok(())
    })
    .unwrap();

    assert_eq!(builder.build("development").get("app_name").unwrap(), "YourApp");
    assert_eq!(builder.build("production").get("app_name").unwrap(), "MyApp");
}

#[test]
fn child_inherits_untouched_parent_keys() {
    let mut service = Builder::with_parent(organisation());
    service.set("app_name", "MyApp");

    let result = service.build("production");

    assert_eq!(result.get("app_path").unwrap(), "/app");
    assert_eq!(result.get("app_name").unwrap(), "MyApp");
    assert_eq!(
        result.get_as::<Database>("database").unwrap(),
        Database {
            host: "localhost".into(),
            pool: 5
        }
    );
}

#[test]
fn three_level_chain_resolves_per_environment() {
    let mut service = Builder::with_parent(organisation());
    service.set("app_name", "Billing");
    service.environment("staging", |env| {
        env.set("database", json!({"host": "staging-db", "pool": 2}));
    });
    let service_staging = service.build("staging");

    let mut worker = Builder::with_parent(service_staging);
    worker.set("queue", "billing-jobs");
    worker.environment("staging", |env| {
        env.set("concurrency", 4);
    });

    let result = worker.build("staging");
    assert_eq!(
        result.to_json(),
        json!({
            "app_path": "/app",
            "app_name": "Billing",
            "database": {"host": "staging-db", "pool": 2},
            "queue": "billing-jobs",
            "concurrency": 4
        })
    );

    // The parent snapshot was taken for staging; other environments of the
    // worker still see it.
    let other = worker.build("production");
    assert_eq!(other.get("database").unwrap()["host"], "staging-db");
    assert!(other.get("concurrency").unwrap_err().is_unknown_key());
}

#[test]
fn logger_precedence_across_the_chain() {
    let parent_logger: SharedLogger = Arc::new(RecordingLogger::new());
    let default_logger: SharedLogger = Arc::new(RecordingLogger::new());
    let env_logger: SharedLogger = Arc::new(RecordingLogger::new());

    let parent = Builder::define(None, |b| b.logger(parent_logger.clone()))
        .unwrap()
        .build("production");

    let mut child = Builder::with_parent(parent.clone());
    assert!(Arc::ptr_eq(child.build("production").logger(), &parent_logger));

    child.logger(default_logger.clone()).unwrap();
    assert!(Arc::ptr_eq(child.build("production").logger(), &default_logger));

    child
        .environment("production", |env| env.logger(env_logger.clone()))
        .unwrap();
    assert!(Arc::ptr_eq(child.build("production").logger(), &env_logger));
    assert!(Arc::ptr_eq(child.build("development").logger(), &default_logger));

    assert_eq!(parent.logger_source(), LoggerSource::DefaultScope);
}

#[test]
fn stream_logger_can_be_installed_per_environment() {
    let buffer = SharedBuffer::new();
    let mut builder = Builder::new();
    builder
        .environment("development", |env| {
            env.logger(Arc::new(
                StreamLogger::new(buffer.clone())
                    .with_progname("billing")
                    .with_level(Severity::Info),
            ))
        })
        .unwrap();

    let config = builder.build("development");
    config.logger().debug("dropped");
    config.logger().info("ready");
    config.logger().log(Severity::Error, "disk full");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" INFO -- billing: ready"));
    assert!(lines[1].ends_with("ERROR -- billing: disk full"));
}

#[test]
fn tracing_logger_is_accepted() {
    let mut builder = Builder::new();
    builder.logger(Arc::new(TracingLogger::new())).unwrap();

    let config = builder.build("production");
    config.logger().warn("routed through tracing");

    assert_eq!(config.logger_source(), LoggerSource::DefaultScope);
}

#[test]
fn resolved_configuration_is_shared_across_threads() {
    let logger = Arc::new(RecordingLogger::new());
    let mut builder = Builder::with_parent(organisation());
    builder.logger(logger.clone()).unwrap();
    let config = Arc::new(builder.build("production"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                config.logger().info(&format!("worker {i}"));
                config.get("app_path").unwrap().clone()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), json!("/app"));
    }

    let mut messages = logger.messages();
    messages.sort();
    assert_eq!(messages, vec!["worker 0", "worker 1", "worker 2", "worker 3"]);
}
