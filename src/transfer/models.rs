//! Transfer request DTO

use serde::Deserialize;

/// Inter-account transfer order.
///
/// The destination is named twice (user and account) and both must agree;
/// a mismatch is treated like a missing account.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[schema(example = 1)]
    pub from_account_id: i64,
    #[schema(example = 2)]
    pub to_user_id: i64,
    #[schema(example = 2)]
    pub to_account_id: i64,
    #[schema(example = 100)]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_body() {
        let req: TransferRequest = serde_json::from_str(
            r#"{"fromAccountId": 7, "toUserId": 3, "toAccountId": 9, "amount": 250}"#,
        )
        .unwrap();
        assert_eq!(req.from_account_id, 7);
        assert_eq!(req.to_user_id, 3);
        assert_eq!(req.to_account_id, 9);
        assert_eq!(req.amount, 250);
    }

    #[test]
    fn test_rejects_snake_case_body() {
        let err = serde_json::from_str::<TransferRequest>(
            r#"{"from_account_id": 7, "to_user_id": 3, "to_account_id": 9, "amount": 250}"#,
        );
        assert!(err.is_err());
    }
}
