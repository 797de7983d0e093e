use e2e::browser::Browser;
use e2e::test_server::{Passwords, TestServer};

#[tokio::test]
async fn test_role_buttons_open_guest_site() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click("#enter-guest").expect("Guest button should exist");

    let links = page.texts(".nav_link").expect("Navigation should render");
    assert_eq!(links.len(), 7);
    assert!(page.find_element("#rsvp").is_ok(), "RSVP section should exist");
    assert!(page.find_element("#firstName").is_ok(), "RSVP form should exist");

    page.click(".back_button").expect("Back button should exist");
    assert!(page.find_element("#enter-couple").is_ok(), "Back lands on login");
}

#[tokio::test]
async fn test_dashboard_shows_seeded_rsvps() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click("#enter-couple").expect("Couple button should exist");

    let values = page.texts(".stat_value").expect("Stat cards should render");
    // rsvps, guests, declined, regular, vegetarian
    assert_eq!(&values[..5], ["3", "3", "1", "1", "2"]);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let server = TestServer::start_with(Passwords {
        guest: Some("sposi2026".to_string()),
        couple: None,
    })
    .await
    .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.type_text("#password", "wrong").expect("Password input should exist");
    page.click("button[type='submit']").expect("Submit button should exist");

    let message = page.find_element(".login_form .error").expect("Error should show");
    assert!(!message.is_empty());

    page.type_text("#password", "sposi2026").expect("Input is cleared and usable");
    page.click("button[type='submit']").expect("Submit button should exist");
    assert!(page.find_element("#rsvp").is_ok(), "Guest site should open");
}
