//! Application services module

pub mod payment_service;

pub use payment_service::{
    InitializePaymentRequest, InitializeWithdrawalRequest, PaymentHandle, PaymentService,
    WithdrawalReceipt,
};
