pub mod app_state;
pub mod page_session;
pub mod views;

pub use app_state::AppState;
pub use page_session::{PageController, PageNavigator, PagePresenter, PageSession};
pub use views::{DialogView, GameOption, NotificationView, QuickLineView};
