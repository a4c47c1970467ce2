use crate::app::events::AppEvent;
use crate::app::navigation::{Navigator, Step};
use crate::app::state::AppState;
use crate::catalog::{ArtworkRefs, Catalog, FavoriteChange};
use crate::error::AppError;
use crate::infra::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Navigated(Step),
    FavoriteToggled(FavoriteChange),
    Ignored,
    Quit,
}

/// What the display layer needs to draw one artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkView<'a> {
    pub index: usize,
    pub len: usize,
    pub refs: &'a ArtworkRefs,
    pub is_favorite: bool,
}

impl ArtworkView<'_> {
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[derive(Debug)]
pub struct GalleryController {
    config: AppConfig,
    catalog: Catalog,
    navigator: Navigator,
    state: AppState,
}

impl GalleryController {
    pub fn new(config: AppConfig, mut catalog: Catalog) -> Result<Self, AppError> {
        let navigator = Navigator::starting_at(catalog.len_nonzero(), config.start_index)?;
        catalog.subscribe_favorites(Box::new(|change| {
            log::info!(
                "[Favorites] artwork {} is now {}",
                change.index,
                if change.is_favorite {
                    "a favorite"
                } else {
                    "not a favorite"
                }
            );
        }));

        Ok(Self {
            config,
            catalog,
            navigator,
            state: AppState::default(),
        })
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Dispatch {
        match event {
            AppEvent::Next => {
                let step = self.navigator.next();
                Dispatch::Navigated(self.remember(step))
            }
            AppEvent::Previous => {
                let step = self.navigator.previous();
                Dispatch::Navigated(self.remember(step))
            }
            AppEvent::ToggleFavorite(index) => {
                if !self.config.favorites_enabled {
                    log::debug!("[Favorites] toggle ignored, favorites are disabled");
                    return Dispatch::Ignored;
                }
                match self.catalog.toggle_favorite(index) {
                    Ok(change) => Dispatch::FavoriteToggled(change),
                    Err(error) => {
                        log::warn!("[Favorites] toggle failed: {error}");
                        Dispatch::Ignored
                    }
                }
            }
            AppEvent::Quit => {
                self.state.quit_requested = true;
                Dispatch::Quit
            }
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<Step, AppError> {
        let step = self.navigator.jump_to(index)?;
        Ok(self.remember(step))
    }

    pub fn current(&self) -> ArtworkView<'_> {
        let index = self.navigator.current();
        // The navigator is built from the catalog length, so this always resolves.
        let artwork = &self.catalog[index];
        ArtworkView {
            index,
            len: self.navigator.len(),
            refs: &artwork.refs,
            is_favorite: artwork.is_favorite(),
        }
    }

    pub fn view(&self, index: usize) -> Option<ArtworkView<'_>> {
        self.catalog.get(index).map(|artwork| ArtworkView {
            index,
            len: self.catalog.len(),
            refs: &artwork.refs,
            is_favorite: artwork.is_favorite(),
        })
    }

    pub fn views(&self) -> impl Iterator<Item = ArtworkView<'_>> {
        let len = self.catalog.len();
        self.catalog
            .iter()
            .enumerate()
            .map(move |(index, artwork)| ArtworkView {
                index,
                len,
                refs: &artwork.refs,
                is_favorite: artwork.is_favorite(),
            })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn remember(&mut self, step: Step) -> Step {
        log::info!(
            "[Gallery] {:?} {} -> {}",
            step.direction,
            step.from,
            step.to
        );
        self.state.navigations += 1;
        step
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::app::navigation::Direction;

    fn controller() -> GalleryController {
        GalleryController::new(AppConfig::default(), Catalog::builtin())
            .expect("controller should build")
    }

    #[test]
    fn starts_on_configured_index() {
        let config = AppConfig {
            start_index: 2,
            ..AppConfig::default()
        };
        let controller =
            GalleryController::new(config, Catalog::builtin()).expect("controller should build");
        let view = controller.current();
        assert_eq!(view.index, 2);
        assert_eq!(view.refs.title, "artwork_title_3");
        assert_eq!(view.position_label(), "3 / 5");
    }

    #[test]
    fn rejects_start_index_beyond_catalog() {
        let config = AppConfig {
            start_index: 5,
            ..AppConfig::default()
        };
        let result = GalleryController::new(config, Catalog::builtin());
        assert!(matches!(
            result,
            Err(AppError::IndexOutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn navigation_events_select_matching_artwork() {
        let mut controller = controller();

        let outcome = controller.dispatch(AppEvent::Previous);
        assert_eq!(
            outcome,
            Dispatch::Navigated(Step {
                from: 0,
                to: 4,
                direction: Direction::Backward
            })
        );
        assert_eq!(controller.current().refs.image, "artwork_5");

        controller.dispatch(AppEvent::Next);
        assert_eq!(controller.current().refs.image, "artwork_1");
        assert_eq!(controller.state().navigations, 2);
    }

    #[test]
    fn toggle_updates_only_that_view() {
        let mut controller = controller();
        let outcome = controller.dispatch(AppEvent::ToggleFavorite(0));
        assert_eq!(
            outcome,
            Dispatch::FavoriteToggled(FavoriteChange {
                index: 0,
                is_favorite: true
            })
        );
        assert!(controller.current().is_favorite);

        controller.dispatch(AppEvent::Next);
        assert!(!controller.current().is_favorite);
        assert_eq!(controller.catalog().favorites(), vec![0]);
    }

    #[test]
    fn dispatched_toggle_notifies_catalog_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut catalog = Catalog::builtin();
        catalog.subscribe_favorites(Box::new(move |change| sink.borrow_mut().push(*change)));
        let mut controller =
            GalleryController::new(AppConfig::default(), catalog).expect("controller should build");

        controller.dispatch(AppEvent::ToggleFavorite(3));
        controller.dispatch(AppEvent::Next);
        controller.dispatch(AppEvent::ToggleFavorite(3));

        assert_eq!(
            *seen.borrow(),
            vec![
                FavoriteChange {
                    index: 3,
                    is_favorite: true
                },
                FavoriteChange {
                    index: 3,
                    is_favorite: false
                },
            ]
        );
    }

    #[test]
    fn views_follow_catalog_order() {
        let mut controller = controller();
        controller.dispatch(AppEvent::ToggleFavorite(1));

        let views: Vec<_> = controller.views().collect();
        assert_eq!(views.len(), 5);
        assert_eq!(views[4].refs.image, "artwork_5");
        assert_eq!(views[4].position_label(), "5 / 5");
        assert!(views[1].is_favorite);
        assert!(!views[0].is_favorite);
    }

    #[test]
    fn toggle_is_ignored_when_favorites_are_disabled() {
        let config = AppConfig {
            favorites_enabled: false,
            ..AppConfig::default()
        };
        let mut controller =
            GalleryController::new(config, Catalog::builtin()).expect("controller should build");

        assert_eq!(controller.dispatch(AppEvent::ToggleFavorite(1)), Dispatch::Ignored);
        assert!(controller.catalog().favorites().is_empty());
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut controller = controller();
        assert_eq!(controller.dispatch(AppEvent::ToggleFavorite(42)), Dispatch::Ignored);
    }

    #[test]
    fn quit_marks_state() {
        let mut controller = controller();
        assert_eq!(controller.dispatch(AppEvent::Quit), Dispatch::Quit);
        assert!(controller.state().quit_requested);
    }

    #[test]
    fn jump_records_step() {
        let mut controller = controller();
        let step = controller.jump_to(3).expect("jump should succeed");
        assert_eq!(step.to, 3);
        assert_eq!(step.direction, Direction::Forward);
        assert_eq!(controller.current().index, 3);
        assert!(controller.jump_to(8).is_err());
        assert_eq!(controller.current().index, 3);
    }
}
