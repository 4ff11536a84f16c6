use std::fmt::{Display, Formatter};

/// Well-known tag numbers
pub mod tags {
    pub const BEGIN_STRING: u32 = 8;
    pub const BODY_LENGTH: u32 = 9;
    pub const CHECK_SUM: u32 = 10;
    pub const MSG_SEQ_NUM: u32 = 34;
    pub const MSG_TYPE: u32 = 35;
    pub const SENDER_COMP_ID: u32 = 49;
    pub const TARGET_COMP_ID: u32 = 56;
}

const FIELD_NAMES: &[(u32, &str)] = &[
    (1, "Account"),
    (6, "AvgPx"),
    (7, "BeginSeqNo"),
    (8, "BeginString"),
    (9, "BodyLength"),
    (10, "CheckSum"),
    (11, "ClOrdID"),
    (14, "CumQty"),
    (16, "EndSeqNo"),
    (17, "ExecID"),
    (21, "HandlInst"),
    (31, "LastPx"),
    (32, "LastQty"),
    (34, "MsgSeqNum"),
    (35, "MsgType"),
    (36, "NewSeqNo"),
    (37, "OrderID"),
    (38, "OrderQty"),
    (39, "OrdStatus"),
    (40, "OrdType"),
    (41, "OrigClOrdID"),
    (43, "PossDupFlag"),
    (44, "Price"),
    (45, "RefSeqNum"),
    (49, "SenderCompID"),
    (52, "SendingTime"),
    (54, "Side"),
    (55, "Symbol"),
    (56, "TargetCompID"),
    (58, "Text"),
    (59, "TimeInForce"),
    (60, "TransactTime"),
    (97, "PossResend"),
    (98, "EncryptMethod"),
    (108, "HeartBtInt"),
    (112, "TestReqID"),
    (122, "OrigSendingTime"),
    (123, "GapFillFlag"),
    (141, "ResetSeqNumFlag"),
    (150, "ExecType"),
    (151, "LeavesQty"),
    (371, "RefTagID"),
    (372, "RefMsgType"),
    (373, "SessionRejectReason"),
    (1128, "ApplVerID"),
];

pub fn field_name(tag: u32) -> Option<&'static str> {
    FIELD_NAMES
        .iter()
        .find(|(number, _)| *number == tag)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: u32,
    pub value: String,
}

impl Field {
    pub fn name(&self) -> Option<&'static str> {
        field_name(self.tag)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}({})={}", name, self.tag, self.value),
            None => write!(f, "{}={}", self.tag, self.value),
        }
    }
}
