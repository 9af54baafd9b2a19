//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockDocumentCommand, MockDocumentQuery, MockUserDirectory};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{documents, json_config, users};

/// Mocks backing one handler test; set expectations before [`Self::app`].
#[derive(Default)]
pub struct MockPorts {
    pub documents: MockDocumentCommand,
    pub documents_query: MockDocumentQuery,
    pub users: MockUserDirectory,
}

impl MockPorts {
    /// Build an app mounting every handler under `/api/v1`.
    pub fn app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(
            Arc::new(self.documents),
            Arc::new(self.documents_query),
            Arc::new(self.users),
        );
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .service(
                web::scope("/api/v1")
                    .service(documents::list_documents)
                    .service(documents::create_documents)
                    .service(documents::create_document)
                    .service(documents::update_document)
                    .service(users::list_users)
                    .service(users::create_user)
                    .service(users::get_user),
            )
    }
}
