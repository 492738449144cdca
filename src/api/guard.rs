use std::future::Future;

use crate::error::ApiError;

/// Run a handler's business logic and translate its failure, if any.
///
/// Deliberate client-facing failures (an `ApiError` anywhere in the error) are
/// returned unchanged. Everything else is logged under `operation` and
/// replaced by the generic 500 so driver or environment detail never reaches
/// the client.
pub async fn guard<T, F>(operation: &'static str, logic: F) -> Result<T, ApiError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    logic.await.map_err(|err| translate(operation, err))
}

pub fn translate(operation: &'static str, err: anyhow::Error) -> ApiError {
    match err.downcast::<ApiError>() {
        Ok(client_error) => client_error,
        Err(unexpected) => {
            tracing::error!(operation, error = ?unexpected, "unhandled failure in handler");
            ApiError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn passes_success_through() {
        let out = guard("op", async { Ok::<_, anyhow::Error>(7) }).await;
        assert_eq!(out, Ok(7));
    }

    #[tokio::test]
    async fn passes_client_errors_through() {
        let out: Result<(), _> = guard("op", async { Err(ApiError::not_found("Not found").into()) }).await;
        assert_eq!(out, Err(ApiError::not_found("Not found")));

        let out: Result<(), _> =
            guard("op", async { Err(ApiError::not_implemented("create_chat").into()) }).await;
        assert_eq!(out.unwrap_err().status_code(), 501);
    }

    #[tokio::test]
    async fn unexpected_failures_become_generic_500() {
        let failures = vec![
            anyhow!("connection reset by peer"),
            anyhow!(std::io::Error::new(std::io::ErrorKind::TimedOut, "server selection timeout")),
            anyhow!("E11000 duplicate key error collection: melo.users"),
        ];
        for failure in failures {
            let out: Result<(), _> = guard("op", async move { Err(failure) }).await;
            let err = out.unwrap_err();
            assert_eq!(err, ApiError::internal_server_error());
            assert_eq!(err.to_json(), ApiError::internal_server_error().to_json());
        }
    }

    #[tokio::test]
    async fn client_error_with_context_still_passes_through() {
        let out: Result<(), _> = guard("op", async {
            Err(anyhow::Error::new(ApiError::not_found("User Not found")).context("checking user"))
        })
        .await;
        assert_eq!(out, Err(ApiError::not_found("User Not found")));
    }
}
