//! Known API error signatures with remediation guidance
//!
//! The API reports failures with a short machine-readable `code` (the
//! signature). The signatures listed here are classified up front so that
//! callers can branch on remediation (confirm a surge, update billing,
//! retry) without matching on raw messages.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A pre-classified API error
#[derive(Debug, PartialEq, Eq)]
pub struct ActionableError {
    /// Human-readable explanation
    pub message: &'static str,
    /// HTTP status the API answers with
    pub status: u16,
    /// Machine-readable error code
    pub signature: &'static str,
    /// Where the user can fix the problem (URL or contact), if anywhere
    pub action: Option<&'static str>,
    /// Whether issuing the same request again may succeed
    pub retryable: bool,
}

impl ActionableError {
    const fn new(status: u16, signature: &'static str, message: &'static str) -> Self {
        Self {
            message,
            status,
            signature,
            action: None,
            retryable: false,
        }
    }

    const fn with_action(mut self, action: &'static str) -> Self {
        self.action = Some(action);
        self
    }

    const fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    /// Check if there is a remediation action
    pub fn has_action(&self) -> bool {
        self.action.is_some_and(|a| !a.is_empty())
    }
}

impl fmt::Display for ActionableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ActionableError {}

const RIDERS_URL: &str = "https://riders.uber.com";

pub static UNCONFIRMED_EMAIL: ActionableError =
    ActionableError::new(400, "unconfirmed_email", "unconfirmed email address")
        .with_action(RIDERS_URL);

pub static PROCESSING_REQUEST: ActionableError = ActionableError::new(
    400,
    "error_processing_request",
    "encountered an error processing the request",
);

pub static PROMOTIONS_REVOKED: ActionableError = ActionableError::new(
    400,
    "promotions_revoked",
    "promotions have been revoked for this account",
);

pub static INVALID_PAYMENT: ActionableError = ActionableError::new(
    400,
    "invalid_payment",
    "rider's payment is invalid. Please update billing information",
);

pub static INVALID_PAYMENT_METHOD: ActionableError = ActionableError::new(
    400,
    "invalid_payment_method",
    "the provided payment method is not valid",
);

pub static OUTSTANDING_BALANCE: ActionableError = ActionableError::new(
    400,
    "outstanding_balance_update_billing",
    "your account has outstanding balances. Please update billing information",
);

pub static INSUFFICIENT_BALANCE: ActionableError = ActionableError::new(
    400,
    "insufficient_balance",
    "insufficient balance on the credit card associated with your account. Please update billing information",
);

pub static PAYMENT_METHOD_NOT_ALLOWED: ActionableError = ActionableError::new(
    400,
    "payment_method_not_allowed",
    "the payment method is not allowed",
);

pub static CARD_HAS_OUTSTANDING_BALANCE: ActionableError = ActionableError::new(
    400,
    "card_assoc_outstanding_balance",
    "the associated card has an outstanding balance. Please update billing information",
);

pub static INVALID_MOBILE_PHONE_NUMBER: ActionableError = ActionableError::new(
    400,
    "invalid_mobile_phone_number",
    "the mobile phone number is not supported; numbers from temporary-number providers are rejected",
);

pub static FORBIDDEN_REQUEST: ActionableError = ActionableError::new(
    403,
    "forbidden",
    "you are forbidden from making a request at this time. Please consult the support team",
)
.with_action("https://help.uber.com,support@uber.com");

pub static UNVERIFIED: ActionableError = ActionableError::new(
    403,
    "unverified",
    "your phone number hasn't yet been confirmed",
)
.with_action(RIDERS_URL);

pub static VERIFICATION_REQUIRED: ActionableError = ActionableError::new(
    403,
    "verification_required",
    "ride requests through the API are not allowed for this account. Please use the iOS or Android rider app",
);

pub static PRODUCT_NOT_ALLOWED: ActionableError = ActionableError::new(
    403,
    "product_not_allowed",
    "the requested product is not available to you. Please select another product",
);

pub static PAY_BALANCE: ActionableError = ActionableError::new(
    403,
    "pay_balance",
    "you have an outstanding balance. Please update your account settings",
)
.with_action(RIDERS_URL);

pub static USER_NOT_ALLOWED: ActionableError = ActionableError::new(
    403,
    "user_not_allowed",
    "this account is banned and not permitted to request a ride",
);

pub static TOO_MANY_CANCELLATIONS: ActionableError = ActionableError::new(
    403,
    "too_many_cancellations",
    "you are temporarily blocked for canceling too many times",
);

pub static MISSING_NATIONAL_ID: ActionableError = ActionableError::new(
    403,
    "missing_national_id",
    "this jurisdiction requires a national ID or passport number before taking a ride. Please enter it through the iOS or Android app",
);

pub static NO_PRODUCT_FOUND: ActionableError = ActionableError::new(
    404,
    "no_product_found",
    "an invalid product ID was requested. Retry the API call with a valid product ID",
);

pub static MISSING_PAYMENT_METHOD: ActionableError = ActionableError::new(
    409,
    "missing_payment_method",
    "please add at least one payment method on file before requesting a car",
)
.with_action(RIDERS_URL);

pub static SURGE: ActionableError = ActionableError::new(
    409,
    "surge",
    "surge pricing is currently in effect for this product. Please confirm the surge pricing first",
);

pub static FARE_EXPIRED: ActionableError = ActionableError::new(
    409,
    "fare_expired",
    "the fare has expired for the requested product. Please get estimates again, confirm the new fare and then re-request",
);

pub static RETRY_REQUEST: ActionableError = ActionableError::new(
    409,
    "retry_request",
    "an error occurred when attempting to request a product. Please retry the request",
)
.retryable();

pub static CURRENT_TRIP_EXISTS: ActionableError = ActionableError::new(
    409,
    "current_trip_exists",
    "the user is currently on a trip",
);

pub static INVALID_FARE_ID: ActionableError =
    ActionableError::new(422, "invalid_fare_id", "the fare id is invalid or expired");

pub static DESTINATION_REQUIRED: ActionableError = ActionableError::new(
    422,
    "destination_required",
    "this product requires setting a destination",
);

pub static DISTANCE_EXCEEDED: ActionableError = ActionableError::new(
    422,
    "distance_exceeded",
    "the distance between start and end location exceeds 100 miles",
);

pub static SAME_PICKUP_DROPOFF: ActionableError = ActionableError::new(
    422,
    "same_pickup_dropoff",
    "pickup and dropoff cannot be the same",
);

pub static INVALID_POOL_DESTINATION: ActionableError = ActionableError::new(
    422,
    "validation_failed",
    "this destination is not supported for uberPOOL",
);

pub static INVALID_SEAT_COUNT: ActionableError = ActionableError::new(
    422,
    "invalid_seat_count",
    "number of seats exceeds max capacity",
);

pub static OUTSIDE_SERVICE_AREA: ActionableError = ActionableError::new(
    422,
    "outside_service_area",
    "the destination is not supported by the requested product",
);

pub static INTERNAL_SERVER_ERROR: ActionableError = ActionableError::new(
    500,
    "internal_server_error",
    "an unknown error has occurred",
);

/// Every known signature
pub static ALL: [&ActionableError; 32] = [
    &UNCONFIRMED_EMAIL,
    &PROCESSING_REQUEST,
    &PROMOTIONS_REVOKED,
    &INVALID_PAYMENT,
    &INVALID_PAYMENT_METHOD,
    &OUTSTANDING_BALANCE,
    &INSUFFICIENT_BALANCE,
    &PAYMENT_METHOD_NOT_ALLOWED,
    &CARD_HAS_OUTSTANDING_BALANCE,
    &INVALID_MOBILE_PHONE_NUMBER,
    &FORBIDDEN_REQUEST,
    &UNVERIFIED,
    &VERIFICATION_REQUIRED,
    &PRODUCT_NOT_ALLOWED,
    &PAY_BALANCE,
    &USER_NOT_ALLOWED,
    &TOO_MANY_CANCELLATIONS,
    &MISSING_NATIONAL_ID,
    &NO_PRODUCT_FOUND,
    &MISSING_PAYMENT_METHOD,
    &SURGE,
    &FARE_EXPIRED,
    &RETRY_REQUEST,
    &CURRENT_TRIP_EXISTS,
    &INVALID_FARE_ID,
    &DESTINATION_REQUIRED,
    &DISTANCE_EXCEEDED,
    &SAME_PICKUP_DROPOFF,
    &INVALID_POOL_DESTINATION,
    &INVALID_SEAT_COUNT,
    &OUTSIDE_SERVICE_AREA,
    &INTERNAL_SERVER_ERROR,
];

static INDEX: LazyLock<HashMap<&'static str, &'static ActionableError>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(ALL.len());
    for ae in ALL {
        let previous = index.insert(ae.signature, ae);
        debug_assert!(
            previous.is_none(),
            "duplicate actionable error signature {:?}",
            ae.signature
        );
    }
    index
});

/// Look up the classified error for a signature
///
/// Unknown signatures are not an error; the caller decides what to do.
pub fn lookup_by_signature(signature: &str) -> Option<&'static ActionableError> {
    INDEX.get(signature).copied()
}
