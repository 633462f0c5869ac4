// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod ledger_api_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod auth_model;
        pub(crate) mod dashboard_model;
        pub(crate) mod inventory_item_model;
        pub(crate) mod timestamp_model;
        pub(crate) mod transaction_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod edit_form;
        pub(crate) mod inventory_item;
        pub(crate) mod ledger_event;
        pub(crate) mod locale;
        pub(crate) mod metrics;
        pub(crate) mod owner;
        pub(crate) mod snapshot;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod edit_protocol;
        pub(crate) mod ledger_store;
        pub(crate) mod metrics;
        pub(crate) mod patch_translation;
    }
    pub(crate) mod repositories {
        pub(crate) mod identity_provider;
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod session_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod dashboard_view;
    pub(crate) mod edit_forms;
    pub(crate) mod icon_classifier;
    pub(crate) mod inventory_card;
    pub(crate) mod sales_register;
    pub(crate) mod translations;
    pub(crate) mod utils;
    pub(crate) mod view_context;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::edit_form::*;
        pub use crate::domain::entities::inventory_item::*;
        pub use crate::domain::entities::ledger_event::*;
        pub use crate::domain::entities::locale::*;
        pub use crate::domain::entities::metrics::*;
        pub use crate::domain::entities::owner::*;
        pub use crate::domain::entities::snapshot::*;
        pub use crate::domain::entities::transaction::*;
    }

    pub mod logic {
        pub use crate::domain::logic::metrics::*;

        pub mod edit_protocol {
            pub use crate::domain::logic::edit_protocol::*;
        }
        pub mod ledger_store {
            pub use crate::domain::logic::ledger_store::*;
        }
        pub mod patch_translation {
            pub use crate::domain::logic::patch_translation::*;
        }
    }

    pub mod repositories {
        pub use crate::data::repositories::ledger_repository_impl::*;
        pub use crate::domain::repositories::identity_provider::*;
        pub use crate::domain::repositories::ledger_repository::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::session_usecase::*;
    }

    pub mod views {
        pub use crate::presentation::dashboard_view::*;
        pub use crate::presentation::edit_forms::*;
        pub use crate::presentation::icon_classifier::*;
        pub use crate::presentation::inventory_card::*;
        pub use crate::presentation::sales_register::*;
        pub use crate::presentation::translations::*;
        pub use crate::presentation::view_context::*;
    }
}
