//! Message type registry: MsgType(35) value to display name

const MESSAGE_TYPES: &[(&str, &str)] = &[
    ("0", "Heartbeat"),
    ("1", "TestRequest"),
    ("2", "ResendRequest"),
    ("3", "Reject"),
    ("4", "SequenceReset"),
    ("5", "Logout"),
    ("6", "IOI"),
    ("7", "Advertisement"),
    ("8", "ExecutionReport"),
    ("9", "OrderCancelReject"),
    ("A", "Logon"),
    ("B", "News"),
    ("C", "Email"),
    ("D", "NewOrderSingle"),
    ("E", "NewOrderList"),
    ("F", "OrderCancelRequest"),
    ("G", "OrderCancelReplaceRequest"),
    ("H", "OrderStatusRequest"),
    ("J", "AllocationInstruction"),
    ("K", "ListCancelRequest"),
    ("L", "ListExecute"),
    ("M", "ListStatusRequest"),
    ("N", "ListStatus"),
    ("P", "AllocationInstructionAck"),
    ("Q", "DontKnowTrade"),
    ("R", "QuoteRequest"),
    ("S", "Quote"),
    ("T", "SettlementInstructions"),
    ("V", "MarketDataRequest"),
    ("W", "MarketDataSnapshotFullRefresh"),
    ("X", "MarketDataIncrementalRefresh"),
    ("Y", "MarketDataRequestReject"),
    ("Z", "QuoteCancel"),
    ("a", "QuoteStatusRequest"),
    ("b", "MassQuoteAcknowledgement"),
    ("c", "SecurityDefinitionRequest"),
    ("d", "SecurityDefinition"),
    ("e", "SecurityStatusRequest"),
    ("f", "SecurityStatus"),
    ("g", "TradingSessionStatusRequest"),
    ("h", "TradingSessionStatus"),
    ("i", "MassQuote"),
    ("j", "BusinessMessageReject"),
    ("k", "BidRequest"),
    ("l", "BidResponse"),
    ("m", "ListStrikePrice"),
    ("n", "XMLnonFIX"),
    ("o", "RegistrationInstructions"),
    ("p", "RegistrationInstructionsResponse"),
    ("q", "OrderMassCancelRequest"),
    ("r", "OrderMassCancelReport"),
    ("s", "NewOrderCross"),
    ("t", "CrossOrderCancelReplaceRequest"),
    ("u", "CrossOrderCancelRequest"),
    ("v", "SecurityTypeRequest"),
    ("w", "SecurityTypes"),
    ("x", "SecurityListRequest"),
    ("y", "SecurityList"),
    ("z", "DerivativeSecurityListRequest"),
    ("AA", "DerivativeSecurityList"),
    ("AB", "NewOrderMultileg"),
    ("AC", "MultilegOrderCancelReplace"),
    ("AD", "TradeCaptureReportRequest"),
    ("AE", "TradeCaptureReport"),
    ("AF", "OrderMassStatusRequest"),
    ("AG", "QuoteRequestReject"),
    ("AH", "RFQRequest"),
    ("AI", "QuoteStatusReport"),
    ("AJ", "QuoteResponse"),
    ("AK", "Confirmation"),
    ("AL", "PositionMaintenanceRequest"),
    ("AM", "PositionMaintenanceReport"),
    ("AN", "RequestForPositions"),
    ("AO", "RequestForPositionsAck"),
    ("AP", "PositionReport"),
    ("AQ", "TradeCaptureReportRequestAck"),
    ("AR", "TradeCaptureReportAck"),
    ("AS", "AllocationReport"),
    ("AT", "AllocationReportAck"),
    ("AU", "ConfirmationAck"),
    ("AV", "SettlementInstructionRequest"),
    ("AW", "AssignmentReport"),
    ("AX", "CollateralRequest"),
    ("AY", "CollateralAssignment"),
    ("AZ", "CollateralResponse"),
    ("BA", "CollateralReport"),
    ("BB", "CollateralInquiry"),
    ("BC", "NetworkCounterpartySystemStatusRequest"),
    ("BD", "NetworkCounterpartySystemStatusResponse"),
    ("BE", "UserRequest"),
    ("BF", "UserResponse"),
    ("BG", "CollateralInquiryAck"),
    ("BH", "ConfirmationRequest"),
];

/// Display name for a message type tag, `None` if the tag is not registered.
pub fn display_name(msg_type: &str) -> Option<&'static str> {
    MESSAGE_TYPES
        .iter()
        .find(|(tag, _)| *tag == msg_type)
        .map(|(_, name)| *name)
}

/// All registered `(tag, name)` pairs
pub fn message_types() -> impl Iterator<Item = (&'static str, &'static str)> {
    MESSAGE_TYPES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_types() {
        assert_eq!(display_name("A"), Some("Logon"));
        assert_eq!(display_name("D"), Some("NewOrderSingle"));
        assert_eq!(display_name("AE"), Some("TradeCaptureReport"));
        assert_eq!(display_name("ZZ"), None);
        assert_eq!(display_name(""), None);
    }

    #[test]
    fn test_tags_are_unique() {
        let tags: HashSet<_> = message_types().map(|(tag, _)| tag).collect();
        assert_eq!(tags.len(), MESSAGE_TYPES.len());
    }
}
