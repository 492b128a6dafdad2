//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod channel_form;
pub mod channel_picker;
pub mod channel_row;
pub mod confirm_dialog;
pub mod error_banner;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod modal;
pub mod playlist_card;
pub mod playlist_form;
pub mod public_link_dialog;
pub mod sidebar;
pub mod text_input;
pub mod toast;

pub use app_layout::{AppShellView, PageContainer};
pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use channel_form::{ChannelFormDialog, ChannelFormValues};
pub use channel_picker::ChannelPickerDialog;
pub use channel_row::ChannelRow;
pub use confirm_dialog::ConfirmDialogView;
pub use error_banner::ErrorBanner;
pub use header::HeaderView;
pub use icons::{
    AlertTriangleIcon, CheckIcon, ChevronDownIcon, ChevronUpIcon, CopyIcon, LinkIcon,
    LoaderIcon, LogOutIcon, MenuIcon, PencilIcon, PlusIcon, RefreshIcon, TrashIcon, TvIcon,
    XIcon,
};
pub use loading_spinner::LoadingSpinner;
pub use modal::Modal;
pub use playlist_card::PlaylistCard;
pub use playlist_form::{PlaylistFormValues, PlaylistFormView};
pub use public_link_dialog::PublicLinkDialog;
pub use sidebar::{NavItem, SidebarView};
pub use text_input::{FormField, TextInput};
pub use toast::ToastView;
