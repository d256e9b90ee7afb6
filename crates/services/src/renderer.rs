//! The seam between the presentation core and whatever draws it.

use deck_core::animation::Recipe;
use deck_core::model::SlideIndex;
use deck_core::navigation::NavSnapshot;

/// Side effects the choreography driver delegates to the UI layer.
///
/// Implementations must tolerate being asked about slides they have no
/// element for: a missing render target is "feature absent", never an error.
pub trait Renderer {
    /// Marks a slide container active or inactive.
    fn set_active(&self, slide: SlideIndex, active: bool);

    /// Tags the departing slide for its slide-out animation. Only called for
    /// forward transitions.
    fn mark_leaving(&self, slide: SlideIndex);

    /// Removes any leaving tag before the destination activates.
    fn clear_leaving(&self);

    /// Rewrites the counter text, progress bar and nav button enablement.
    fn refresh_chrome(&self, snapshot: &NavSnapshot);

    /// Runs the entrance animation recipe for the newly active slide.
    fn play_entrance(&self, slide: SlideIndex, recipe: &Recipe);
}
