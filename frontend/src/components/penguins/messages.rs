use common::catalog::FormField;
use common::model::penguin::Penguin;

#[derive(Clone)]
pub enum Msg {
    /// The controller's state changed; re-render.
    Refresh,
    ToggleFavorite(Penguin),
    OpenCreateForm,
    OpenEditForm(Penguin),
    CloseForm,
    UpdateField(FormField, String),
    SetFavorite(bool),
    Submit,
    RequestDelete(Penguin),
    ConfirmDelete,
    CancelDelete,
}
