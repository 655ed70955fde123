//! Routes a panel descriptor to the view that renders it.

use vault_terminal::{PanelData, PanelDescriptor, PanelKind};

/// One view per panel kind.
///
/// Implementors produce whatever the front end draws: text, widgets, a
/// scene graph. Adding a [`PanelKind`] variant forces every implementor to
/// handle it.
pub trait PanelViews {
    type Output;

    fn id(&self, data: &PanelData) -> Self::Output;
    fn dossier(&self, data: &PanelData) -> Self::Output;
    fn sheet(&self, data: &PanelData) -> Self::Output;
    fn map(&self, data: &PanelData) -> Self::Output;
    fn locations(&self, data: &PanelData) -> Self::Output;
    fn timeline(&self, data: &PanelData) -> Self::Output;
    fn quests(&self, data: &PanelData) -> Self::Output;
    fn inventory(&self, data: &PanelData) -> Self::Output;
    fn journal(&self, data: &PanelData) -> Self::Output;
    fn relations(&self, data: &PanelData) -> Self::Output;

    /// Fallback for a tag that names no known panel.
    fn unknown(&self, tag: &str) -> Self::Output;
}

/// Render a descriptor with the matching view.
pub fn dispatch<V: PanelViews + ?Sized>(views: &V, panel: &PanelDescriptor) -> V::Output {
    let data = &panel.data;
    match panel.kind {
        PanelKind::Id => views.id(data),
        PanelKind::Dossier => views.dossier(data),
        PanelKind::Sheet => views.sheet(data),
        PanelKind::Map => views.map(data),
        PanelKind::Locations => views.locations(data),
        PanelKind::Timeline => views.timeline(data),
        PanelKind::Quests => views.quests(data),
        PanelKind::Inventory => views.inventory(data),
        PanelKind::Journal => views.journal(data),
        PanelKind::Relations => views.relations(data),
    }
}

/// Render by wire tag. Unrecognized tags go to [`PanelViews::unknown`].
pub fn dispatch_tag<V: PanelViews + ?Sized>(views: &V, tag: &str, data: PanelData) -> V::Output {
    match PanelKind::from_tag(tag) {
        Some(kind) => dispatch(views, &PanelDescriptor::new(kind, data)),
        None => {
            log::warn!("Unknown panel type: {tag}");
            views.unknown(tag)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vault_data::Snapshot;

    use super::*;

    /// Echoes the method that was called.
    struct Names;
    impl PanelViews for Names {
        type Output = String;
        fn id(&self, _: &PanelData) -> String {
            "id".into()
        }
        fn dossier(&self, _: &PanelData) -> String {
            "dossier".into()
        }
        fn sheet(&self, _: &PanelData) -> String {
            "sheet".into()
        }
        fn map(&self, _: &PanelData) -> String {
            "map".into()
        }
        fn locations(&self, d: &PanelData) -> String {
            format!("locations:{}", d.selected_location.as_deref().unwrap_or("-"))
        }
        fn timeline(&self, _: &PanelData) -> String {
            "timeline".into()
        }
        fn quests(&self, _: &PanelData) -> String {
            "quests".into()
        }
        fn inventory(&self, _: &PanelData) -> String {
            "inventory".into()
        }
        fn journal(&self, _: &PanelData) -> String {
            "journal".into()
        }
        fn relations(&self, _: &PanelData) -> String {
            "relations".into()
        }
        fn unknown(&self, tag: &str) -> String {
            format!("Unknown panel type: {tag}")
        }
    }

    fn data() -> PanelData {
        PanelData::new(Arc::new(Snapshot::default()))
    }

    #[test]
    fn every_kind_reaches_its_view() {
        for kind in PanelKind::ALL {
            let out = dispatch(&Names, &PanelDescriptor::new(kind, data()));
            assert!(out.starts_with(kind.tag()), "{kind} -> {out}");
        }
    }

    #[test]
    fn panel_data_passes_through() {
        let d = PanelData {
            selected_location: Some("VAULT13".into()),
            ..data()
        };
        let out = dispatch(&Names, &PanelDescriptor::new(PanelKind::Locations, d));
        assert_eq!(out, "locations:VAULT13");
    }

    #[test]
    fn tag_dispatch_known() {
        assert_eq!(dispatch_tag(&Names, "quests", data()), "quests");
    }

    #[test]
    fn tag_dispatch_unknown_falls_back() {
        assert_eq!(
            dispatch_tag(&Names, "pipboy", data()),
            "Unknown panel type: pipboy"
        );
    }
}
