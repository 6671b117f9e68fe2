use actix_web::{http::header, test, web, App, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use userboard::config::{set_basic_auth, BasicAuthConfig};
use userboard::services::basic_auth_service::BasicAuthMiddleware;

async fn ok() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[actix_web::test]
async fn enforces_configured_credentials() {
    set_basic_auth(Some(BasicAuthConfig {
        username: "admin".into(),
        password: "pw".into(),
    }));

    let app = test::init_service(
        App::new()
            .wrap(BasicAuthMiddleware)
            .route("/u", web::get().to(ok)),
    )
    .await;

    let req = test::TestRequest::get().uri("/u").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));

    let req = test::TestRequest::get()
        .uri("/u")
        .insert_header((header::AUTHORIZATION, format!("Basic {}", STANDARD.encode("admin:pw"))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
