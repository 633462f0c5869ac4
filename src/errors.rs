use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    UnknownLocale,
    "Unknown locale '{code}', expected 'en' or 'ur'.",
    { code: &str }
);

// Backend reads.
define_client_error!(
    FetchFailed,
    "Failed to fetch dashboard for owner '{owner}'.",
    { owner: &str }
);
define_internal_error!(
    MalformedResponse,
    "Backend returned a malformed response for '{endpoint}'.",
    { endpoint: &str }
);

// Backend writes.
define_client_error!(
    MutationFailed,
    "Failed to {action} {entity} '{id}'.",
    { action: &str, entity: &str, id: &str }
);
define_client_error!(
    AuthSyncFailed,
    "Failed to {action} owner '{owner}' with the backend.",
    { action: &str, owner: &str }
);

// Identity.
define_client_error!(
    InvalidPhoneNumber,
    "Invalid phone number: '{value}'. Expected international format, e.g. +923001234567.",
    { value: &str }
);
define_client_error!(
    OwnerMismatch,
    "Operation for owner '{requested}' rejected, the active owner is '{active}'.",
    { requested: &str, active: &str }
);
define_client_error!(
    VerificationFailed,
    "Could not verify phone number '{phone}'.",
    { phone: &str }
);
define_client_error!(NotSignedIn, "No owner is signed in.");

// Edit form validation.
define_client_error!(
    UnknownField,
    "Form has no field named '{field}'.",
    { field: &str }
);
define_client_error!(
    InvalidNumberInput,
    "Field '{field}' expects a number, got '{input}'.",
    { field: &str, input: &str }
);
define_client_error!(
    MissingRequiredField,
    "Field '{field}' is required.",
    { field: &str }
);
define_client_error!(
    NegativeValue,
    "Field '{field}' cannot be negative ({value}).",
    { field: &str, value: f64 }
);
