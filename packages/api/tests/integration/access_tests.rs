use api::config::AccessConfig;
use api::test_utils::TestContext;
use api::types::Role;

fn passwords() -> AccessConfig {
    AccessConfig {
        guest_password: Some("guestsecret".to_string()),
        couple_password: Some("couplesecret".to_string()),
    }
}

#[tokio::test]
async fn public_config_reports_the_gate() {
    let ctx = TestContext::with_access(passwords()).await;
    ctx.set_global();

    let cfg = api::public_config().await.expect("Config should load");
    assert!(cfg.password_gate);
}

#[tokio::test]
async fn no_passwords_means_no_gate() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let cfg = api::public_config().await.expect("Config should load");
    assert!(!cfg.password_gate);
}

#[tokio::test]
async fn enter_maps_passwords_to_roles() {
    let ctx = TestContext::with_access(passwords()).await;
    ctx.set_global();

    let role = api::enter("guestsecret".to_string())
        .await
        .expect("Guest password should be accepted");
    assert_eq!(role, Role::Guest);

    let role = api::enter("couplesecret".to_string())
        .await
        .expect("Couple password should be accepted");
    assert_eq!(role, Role::Couple);

    let result = api::enter("wrong".to_string()).await;
    assert!(result.is_err(), "Wrong password should be rejected");
}
