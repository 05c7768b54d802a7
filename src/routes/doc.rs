use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        booking::{Booking, BookingType},
        contact::ContactMessage,
        newsletter::NewsletterSignup,
        products::NewProduct,
    },
    models::Product,
    response::{AckStatus, Acknowledgement, Created, ErrorDetail, ErrorResponse, MessageResponse},
    routes::{health, products, submissions},
    services::diagnostics_service::DiagnosticsReport,
    validation::{ErrorKind, FieldError},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Botanical Boutique API"),
    paths(
        health::root,
        health::diagnostics,
        products::list_products,
        products::get_product,
        products::create_product,
        submissions::contact,
        submissions::booking,
        submissions::newsletter
    ),
    components(
        schemas(
            Product,
            NewProduct,
            ContactMessage,
            Booking,
            BookingType,
            NewsletterSignup,
            Created,
            AckStatus,
            Acknowledgement,
            MessageResponse,
            DiagnosticsReport,
            ErrorResponse,
            ErrorDetail,
            FieldError,
            ErrorKind
        )
    ),
    tags(
        (name = "Health", description = "Liveness and diagnostics"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Submissions", description = "Contact, booking and newsletter endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
