//! Form domain layer
//!
//! Field values, the `FormView` surface controllers talk through, and the
//! login and registration controllers built on it.

mod field;
mod form_state;
mod login;
mod register;
mod success;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, FormController, FormModel, FormPhase, FormView};
pub use login::LoginForm;
pub use register::RegisterForm;
pub use success::{ShownPanel, SUCCESS_ICON};
