mod common;

use clap::Parser;
use common::{start_api, EnvGuard, TestEnv};
use portal::auth::{LoginFlow, RegisterFlow, SubmitOutcome};
use portal::cli::{account, Cli, CliContext, Commands};
use portal::config::Config;
use portal::session::SessionKey;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_no_subcommand_launches_tui_on_route() {
    let cli = Cli::try_parse_from(["portal", "--route", "/login"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.route, "/login");

    let cli = Cli::try_parse_from(["portal"]).unwrap();
    assert_eq!(cli.route, "/");
    assert!(cli.api_url.is_none());
}

#[test]
fn test_login_password_from_env() {
    let _env = EnvGuard::new().set("PORTAL_PASSWORD", "from-env");

    let cli = Cli::try_parse_from(["portal", "login", "--email", "a@b.com"]).unwrap();
    match cli.command {
        Some(Commands::Login { email, password }) => {
            assert_eq!(email, "a@b.com");
            assert_eq!(password, "from-env");
        }
        other => panic!("expected login, got {:?}", other),
    }
}

#[test]
fn test_login_requires_password() {
    let _env = EnvGuard::new().remove("PORTAL_PASSWORD");
    assert!(Cli::try_parse_from(["portal", "login", "--email", "a@b.com"]).is_err());
}

#[test]
fn test_global_api_url_after_subcommand() {
    let cli = Cli::try_parse_from(["portal", "status", "--api-url", "http://127.0.0.1:9/api"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Status)));
    assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9/api"));
}

#[test]
fn test_base_url_precedence() {
    let env = TestEnv::new();
    let mut config = Config::default();
    config.api.base_url = "http://file.example/api".to_string();
    env.save_config(&config);

    let guard = env.env_override();
    let ctx = CliContext::load(None).unwrap();
    assert_eq!(ctx.api.base_url(), "http://file.example/api");
    assert_eq!(ctx.config_path, env.config_path());

    let _guard = guard.set("PORTAL_API_URL", "http://env.example/api");
    let ctx = CliContext::load(None).unwrap();
    assert_eq!(ctx.api.base_url(), "http://env.example/api");

    let ctx = CliContext::load(Some("http://flag.example/api".to_string())).unwrap();
    assert_eq!(ctx.api.base_url(), "http://flag.example/api");
}

#[test]
fn test_load_creates_default_config() {
    let env = TestEnv::new();
    let _guard = env.env_override();

    let ctx = CliContext::load(None).unwrap();
    assert!(env.config_path().exists());
    assert_eq!(ctx.api.base_url(), "http://localhost:8000/api");
    assert!(!ctx.session.is_authenticated());
}

#[test]
fn test_logout_clears_session_file() {
    let env = TestEnv::new();
    let mut session = env.session();
    session.set(SessionKey::AccessToken, "AT1").unwrap();
    session.set(SessionKey::RefreshToken, "RT1").unwrap();
    assert!(env.session_file_exists());

    let mut ctx = CliContext::new(Config::default(), env.session()).unwrap();
    account::logout(&mut ctx).unwrap();

    assert!(!env.session_file_exists());
    assert!(!ctx.session.is_authenticated());
}

#[test]
fn test_corrupt_session_file_does_not_block_logout() {
    let env = TestEnv::new();
    std::fs::write(env.session_path(), "values = 3").unwrap();
    let _guard = env.env_override();

    let mut ctx = CliContext::load(None).unwrap();
    assert!(!ctx.session.is_authenticated());

    account::logout(&mut ctx).unwrap();
    assert!(!env.session_file_exists());
}

#[tokio::test]
async fn test_login_command_flow() {
    let Some(server) = start_api().await else {
        return;
    };
    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"access": "AT1", "refresh": "RT1"})),
        )
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let mut config = Config::default();
    config.api = common::api_config(&server);
    let mut ctx = CliContext::new(config, env.session()).unwrap();

    let (outcome, form) =
        account::submit_form::<LoginFlow>(&mut ctx, &[("email", "a@b.com"), ("password", "x")])
            .await;

    assert!(account::report(&outcome, &form));
    assert_eq!(env.session().get(SessionKey::AccessToken), Some("AT1"));
}

#[tokio::test]
async fn test_register_command_failure_reports_false() {
    let Some(server) = start_api().await else {
        return;
    };
    Mock::given(method("POST"))
        .and(path("/api/register/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let mut config = Config::default();
    config.api = common::api_config(&server);
    let mut ctx = CliContext::new(config, env.session()).unwrap();

    let (outcome, form) = account::submit_form::<RegisterFlow>(
        &mut ctx,
        &[
            ("username", "ana"),
            ("email", "ana@example.com"),
            ("password", "hunter22"),
            ("password_confirm", "hunter22"),
        ],
    )
    .await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!account::report(&outcome, &form));
    assert!(!env.session_file_exists());
}
