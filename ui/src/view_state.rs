/// Interaction state of an entity view.
///
/// One value replaces the pile of open/saving/deleting flags the views would
/// otherwise juggle, so combinations like "saving while no dialog is open"
/// cannot be represented. Every handler path ends back at `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    /// The view's lists are being fetched; the table shows skeleton rows.
    Loading,
    /// The entity form is open. `edit` is the record being edited, `None`
    /// in create mode. `busy` while a save is in flight.
    Dialog { edit: Option<T>, busy: bool },
    /// The delete confirmation is open for `target`. `busy` while the
    /// delete is in flight.
    Confirm { target: T, busy: bool },
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// True while a save or delete is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            ViewState::Dialog { busy: true, .. } | ViewState::Confirm { busy: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_the_only_loading_state() {
        assert!(ViewState::<()>::Loading.is_loading());
        assert!(!ViewState::<()>::Idle.is_loading());
        assert!(
            !ViewState::Dialog {
                edit: Some(()),
                busy: true
            }
            .is_loading()
        );
    }

    #[test]
    fn busy_requires_an_open_dialog_or_confirm() {
        assert!(!ViewState::<()>::Idle.is_busy());
        assert!(!ViewState::<()>::Loading.is_busy());
        assert!(
            !ViewState::Dialog {
                edit: None::<()>,
                busy: false
            }
            .is_busy()
        );
        assert!(
            ViewState::Dialog {
                edit: None::<()>,
                busy: true
            }
            .is_busy()
        );
        assert!(
            ViewState::Confirm {
                target: (),
                busy: true
            }
            .is_busy()
        );
    }
}
