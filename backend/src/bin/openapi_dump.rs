//! Print the OpenAPI document as JSON.

use std::process::ExitCode;

use contact_backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("failed to render OpenAPI document: {error}");
            ExitCode::FAILURE
        }
    }
}
