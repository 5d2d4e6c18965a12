use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    qr_code::{self, QrCodeConfig},
    service::tickets_service::TicketsService,
    views,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/generate-ticket", post(generate_ticket))
        .route_layer(application_middleware.body_limit.clone())
        .route("/ticket/:ticket_id", get(ticket_page))
        .route("/scanned/:ticket_id", get(scanned_page))
}

async fn generate_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Form(request): Form<input::TicketRequest>,
) -> Result<Redirect, Error> {
    let output::TicketId { id } = tickets_service.issue_ticket(request).await?;

    Ok(Redirect::to(&format!("/ticket/{id}")))
}

async fn ticket_page(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(qr_code_config): State<QrCodeConfig>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Html<String>, Error> {
    let ticket = tickets_service.find_ticket(ticket_id).await?;

    let url = qr_code::verification_url(&qr_code_config, ticket.id);
    let qr_data_uri = qr_code::render_data_uri(&url)?;

    Ok(Html(views::owner_page(&ticket, &qr_data_uri)))
}

async fn scanned_page(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Html<String>, Error> {
    let ticket = tickets_service.find_ticket(ticket_id).await?;

    Ok(Html(views::scan_page(&ticket)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::{
        ticket_api_service,
        tickets_service::MockTicketsService,
    };
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use time::OffsetDateTime;
    use tower::ServiceExt;
    use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

    fn create_test_application(tickets_service: MockTicketsService) -> Router {
        let middleware = ApplicationMiddleware {
            body_limit: RequestBodyLimitLayer::new(4096),
            trace: TraceLayer::new_for_http(),
        };
        let state = ApplicationState {
            tickets_service: Arc::new(tickets_service),
            qr_code_config: QrCodeConfig {
                base_url: "http://localhost:3000".to_string(),
            },
        };

        routing(&middleware).with_state(state)
    }

    fn ticket(id: Uuid) -> output::Ticket {
        output::Ticket {
            id,
            vatin: "12345678901".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Horvat".to_string(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn generate_ticket_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate-ticket")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn generate_ticket_redirects_to_owner_view() {
        let id = Uuid::new_v4();
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_issue_ticket()
            .withf(|request| {
                request.vatin == "12345678901"
                    && request.first_name == "Ana"
                    && request.last_name == "Horvat"
            })
            .returning(move |_| Ok(output::TicketId { id }));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(generate_ticket_request(
                "vatin=12345678901&firstName=Ana&lastName=Horvat",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location.to_str().unwrap(), format!("/ticket/{id}"));
    }

    #[tokio::test]
    async fn generate_ticket_validation_error_json_payload() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_issue_ticket()
            .returning(|_| Err(Error::Validation("vatin is required")));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(generate_ticket_request("firstName=Ana&lastName=Horvat"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        let json = serde_json::from_str::<serde_json::Value>(&body).unwrap();
        assert!(json.get("error").unwrap().is_string());
    }

    #[tokio::test]
    async fn generate_ticket_limit_reached_json_payload() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_issue_ticket()
            .returning(|_| Err(Error::TicketLimitReached));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(generate_ticket_request(
                "vatin=12345678901&firstName=Ana&lastName=Horvat",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        let json = serde_json::from_str::<serde_json::Value>(&body).unwrap();
        assert!(json.get("error").unwrap().is_string());
    }

    #[tokio::test]
    async fn generate_ticket_authorization_failed_bad_gateway() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service.expect_issue_ticket().returning(|_| {
            Err(Error::TicketApi(
                ticket_api_service::Error::Authorization(
                    "token endpoint returned 401".to_string(),
                ),
            ))
        });
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(generate_ticket_request(
                "vatin=12345678901&firstName=Ana&lastName=Horvat",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn ticket_page_contains_identity_and_qr() {
        let id = Uuid::new_v4();
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_find_ticket()
            .returning(|id| Ok(ticket(id)));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/ticket/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Ana"));
        assert!(body.contains("Horvat"));
        assert!(body.contains("12345678901"));
        assert!(body.contains("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn ticket_page_not_exist() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_find_ticket()
            .returning(|_| Err(Error::TicketNotExist));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/ticket/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn scanned_page_no_identity_no_qr() {
        let id = Uuid::new_v4();
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_find_ticket()
            .returning(|id| Ok(ticket(id)));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/scanned/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(&id.to_string()));
        assert!(!body.contains("Ana"));
        assert!(!body.contains("Horvat"));
        assert!(!body.contains("12345678901"));
        assert!(!body.contains("data:image/png"));
    }

    #[tokio::test]
    async fn scanned_page_not_exist() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_find_ticket()
            .returning(|_| Err(Error::TicketNotExist));
        let app = create_test_application(tickets_service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/scanned/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
