//! Actions understood by the page reducer
//!
//! Actions are tagged the same way in code and in the config script:
//!
//! ```toml
//! [[actions]]
//! type = "UPDATE_TITLE_TEXT"
//! text = "Updated Title"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Bootstrap action; the reducer treats it like any unknown action
    #[default]
    Init,
    UpdateTitleText { text: String },
    UpdateTitleColor { color: String },
    UpdateContentText { text: String },
    UpdateContentColor { color: String },
}
