use crate::api::{CalculationClient, CalculationError, Operands};

/// Await `client.calculate(operands)` and hand back its outcome unchanged.
///
/// # Errors
/// Whatever `calculate` failed with.
pub async fn calculate_through(
    client: &dyn CalculationClient,
    operands: Operands,
) -> Result<i64, CalculationError> {
    let result = client.calculate(operands).await;
    if let Err(e) = &result {
        tracing::debug!(error = %e, ?operands, "calculation failed");
    }
    result
}
