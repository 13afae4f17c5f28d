/// All user-facing strings of the translation list view.
///
/// The view is Spanish-only, matching the language names in the registry.
#[derive(Debug, Clone)]
pub struct ViewStrings {
    // ==================== Form Headings ====================
    /// Heading shown when the add form opens
    pub form_title: &'static str,

    /// Subtitle under the form heading
    pub form_subtitle: &'static str,

    // ==================== Success Messages ====================
    /// Flash message after an update succeeds
    pub updated: &'static str,

    /// Flash message after a create succeeds
    pub created: &'static str,

    /// Alert title after a delete succeeds
    pub deleted_title: &'static str,

    /// Alert body after a delete succeeds
    pub deleted: &'static str,

    // ==================== Error Messages ====================
    /// Title used by every error alert
    pub error_title: &'static str,

    /// The record list could not be fetched
    pub load_failed: &'static str,

    /// The update request failed
    pub update_failed: &'static str,

    /// The translate (create) request failed
    pub create_failed: &'static str,

    /// The delete request failed
    pub delete_failed: &'static str,

    /// A single record could not be fetched
    pub fetch_failed: &'static str,

    // ==================== Delete Confirmation ====================
    pub confirm_delete_title: &'static str,
    pub confirm_delete_message: &'static str,

    /// Title of the alert shown when the user backs out of a delete
    pub delete_cancelled_title: &'static str,

    /// Body of the alert shown when the user backs out of a delete
    pub delete_cancelled: &'static str,
}

static SPANISH: ViewStrings = ViewStrings {
    form_title: "Nueva Traducción",
    form_subtitle: "Agrega una nueva traducción a la lista",

    updated: "Traducción actualizada exitosamente",
    created: "Traducción agregada exitosamente",
    deleted_title: "Eliminado",
    deleted: "La traducción ha sido eliminada",

    error_title: "Error",
    load_failed: "No se pudieron obtener las traducciones",
    update_failed: "No se pudo actualizar la traducción",
    create_failed: "No se pudo agregar la traducción",
    delete_failed: "No se pudo eliminar la traducción",
    fetch_failed: "No se pudo obtener la traducción",

    confirm_delete_title: "¿Estás seguro?",
    confirm_delete_message: "¡No podrás revertir esto!",
    delete_cancelled_title: "Cancelado",
    delete_cancelled: "Tu traducción está a salvo :)",
};

impl ViewStrings {
    /// Strings for the view.
    pub fn get() -> &'static ViewStrings {
        &SPANISH
    }
}
