use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShipCo API",
        version = "0.1.0",
        description = r#"
# ShipCo Logistics Demo API

Backend for the ShipCo marketing site and its demo admin panel.

## Tracking

Public lookup over a fixed directory of demo shipments. Try the documented
tracking numbers `SHP123456` and `SHP789012` (lookup is case-insensitive).

## Admin

The admin area manages an in-memory registry of shipment summaries. Log in
with one of the demo credential pairs (`admin@shipco.com` / `admin123` or
`demo@shipco.com` / `demo123`) and send the issued token on every admin
request:

```
Authorization: Bearer <your-token>
```

State is process-memory only and resets on restart.
        "#,
        contact(
            name = "ShipCo Support",
            email = "info@shipco.com"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "tracking", description = "Public shipment tracking lookup"),
        (name = "auth", description = "Demo admin authentication"),
        (name = "admin", description = "Shipment registry management")
    ),
    paths(
        crate::handlers::tracking::lookup,
        crate::handlers::tracking::lookup_by_number,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::auth::me,
        crate::handlers::shipments::list_shipments,
        crate::handlers::shipments::create_shipment,
        crate::handlers::shipments::update_shipment,
        crate::handlers::shipments::delete_shipment,
        crate::handlers::shipments::shipment_stats,
    ),
    components(
        schemas(
            crate::ApiResponse<serde_json::Value>,
            crate::errors::ErrorResponse,
            crate::models::shipment::ShipmentStatus,
            crate::models::shipment::TrackingUpdate,
            crate::models::shipment::ShipmentRecord,
            crate::models::shipment::ShipmentSummary,
            crate::services::shipments::RegistryStats,
            crate::handlers::shipments::CreateShipmentRequest,
            crate::handlers::shipments::UpdateShipmentRequest,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::TokenResponse,
            crate::handlers::auth::SessionResponse,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
