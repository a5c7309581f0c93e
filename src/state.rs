use std::rc::Rc;

use yew::Reducible;

/// The named anchor regions of the page, in declaration order. Navigation
/// targets and scroll highlighting both work off this list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Posts,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Posts,
        Section::About,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Posts => "posts",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Posts => "Posts",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub thumbnail: &'static str,
}

/// Static post catalog. No posts are created or removed at runtime.
pub static POSTS: [Post; 4] = [
    Post {
        id: 1,
        title: "Exploring Virtual Reality",
        excerpt: "Dive into the world of VR and its impact on our senses.",
        content: "Virtual reality headsets no longer just show us pictures; they \
            convince our inner ear, our skin and our sense of balance that we are \
            somewhere else entirely. In this post we walk through the installations \
            in our VR wing and what each one reveals about how easily perception \
            can be rebuilt from scratch.",
        thumbnail: "/optic.jpg",
    },
    Post {
        id: 2,
        title: "The Art of Sound Design",
        excerpt: "Discover how sound shapes our perception of reality.",
        content: "Close your eyes in any of our exhibition rooms and the space \
            keeps telling you its story. Our resident sound designers explain how \
            layered field recordings, binaural mixing and sub-bass textures steer \
            attention and mood without a single visual cue.",
        thumbnail: "/exhibition.jpg",
    },
    Post {
        id: 3,
        title: "Visual Illusions in Digital Art",
        excerpt: "Explore the fascinating world of visual illusions in digital mediums.",
        content: "From impossible geometry to motion aftereffects, digital canvases \
            let artists weaponize the shortcuts our visual system takes. We look at \
            three pieces from the current program and the perceptual tricks that \
            power them.",
        thumbnail: "/debate.jpg",
    },
    Post {
        id: 4,
        title: "The Future of Haptic Feedback",
        excerpt: "Learn about emerging technologies in touch sensation.",
        content: "Touch is the last frontier of immersive media. Ultrasonic arrays, \
            electrostatic surfaces and wearable actuators are starting to put real \
            texture into virtual objects. Here is what we are experimenting with \
            for next season's haptics lab.",
        thumbnail: "/workshop.jpg",
    },
];

/// Measured geometry of one section element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// Percentage of the total scrollable distance traversed, clamped to [0, 100].
/// A page that cannot scroll at all reports 0.
pub fn scroll_progress(offset: f64, viewport: f64, full_height: f64) -> f64 {
    let range = full_height - viewport;
    if range <= 0.0 {
        return 0.0;
    }
    (offset / range * 100.0).clamp(0.0, 100.0)
}

/// Section whose range `[top - viewport/2, top + height - viewport/2)`
/// contains `offset`. Bounds are checked in declaration order and the last
/// match wins, so overlapping ranges resolve to the later section. Missing
/// elements never make it into `bounds`, so they are skipped naturally.
pub fn active_section(offset: f64, viewport: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let mut active = None;
    for b in bounds {
        let lower = b.top - viewport / 2.0;
        let upper = b.top + b.height - viewport / 2.0;
        if offset >= lower && offset < upper {
            active = Some(b.section);
        }
    }
    active
}

/// All of the page's ephemeral UI state. Lives for one page view, resets to
/// defaults on reload.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    pub active_section: Section,
    pub menu_open: bool,
    pub selected_post: Option<&'static Post>,
    pub scroll_progress: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            menu_open: false,
            selected_post: None,
            scroll_progress: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum UiAction {
    /// New scroll measurements. `active` of `None` (no section range matched)
    /// keeps the current highlight.
    Scrolled {
        progress: f64,
        active: Option<Section>,
    },
    ToggleMenu,
    CloseMenu,
    OpenPost(&'static Post),
    ClosePost,
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: UiAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UiAction::Scrolled { progress, active } => {
                next.scroll_progress = progress;
                if let Some(section) = active {
                    next.active_section = section;
                }
            }
            UiAction::ToggleMenu => next.menu_open = !next.menu_open,
            UiAction::CloseMenu => next.menu_open = false,
            UiAction::OpenPost(post) => next.selected_post = Some(post),
            UiAction::ClosePost => next.selected_post = None,
        }
        next.into()
    }
}

/// Compound action for picking a section from the mobile overlay: issue
/// exactly one navigation request, then close the menu.
pub fn menu_select<F>(section: Section, mut navigate: F) -> UiAction
where
    F: FnMut(Section),
{
    navigate(section);
    UiAction::CloseMenu
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: UiState, action: UiAction) -> UiState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn progress_matches_linear_formula() {
        // viewport 800, total 3800 -> scrollable range 3000
        assert_eq!(scroll_progress(1500.0, 800.0, 3800.0), 50.0);
        assert_eq!(scroll_progress(0.0, 800.0, 3800.0), 0.0);
        assert_eq!(scroll_progress(3000.0, 800.0, 3800.0), 100.0);
    }

    #[test]
    fn progress_is_monotone_over_the_valid_range() {
        let mut last = 0.0;
        for offset in (0..=3000).step_by(50) {
            let p = scroll_progress(offset as f64, 800.0, 3800.0);
            assert!(p >= last, "progress regressed at offset {offset}");
            last = p;
        }
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(9999.0, 800.0, 3800.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 800.0, 3800.0), 0.0);
    }

    #[test]
    fn unscrollable_page_reports_zero_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0, 600.0), 0.0);
    }

    #[test]
    fn section_membership_uses_half_viewport_offset() {
        let bounds = [
            SectionBounds { section: Section::Home, top: 0.0, height: 800.0 },
            SectionBounds { section: Section::Posts, top: 800.0, height: 1000.0 },
        ];
        // 1000 falls in posts' range [400, 1400)
        assert_eq!(active_section(1000.0, 800.0, &bounds), Some(Section::Posts));
        assert_eq!(active_section(0.0, 800.0, &bounds), Some(Section::Home));
        // Upper bound is exclusive
        assert_eq!(active_section(1400.0, 800.0, &bounds), None);
    }

    #[test]
    fn overlapping_ranges_resolve_to_the_last_declared_section() {
        let bounds = [
            SectionBounds { section: Section::Home, top: 0.0, height: 1000.0 },
            SectionBounds { section: Section::Posts, top: 200.0, height: 1000.0 },
        ];
        assert_eq!(active_section(300.0, 800.0, &bounds), Some(Section::Posts));
    }

    #[test]
    fn no_bounds_means_no_active_section() {
        assert_eq!(active_section(500.0, 800.0, &[]), None);
    }

    #[test]
    fn scrolled_updates_progress_and_highlight() {
        let state = reduce(
            UiState::default(),
            UiAction::Scrolled { progress: 42.0, active: Some(Section::About) },
        );
        assert_eq!(state.scroll_progress, 42.0);
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn scrolled_without_a_match_keeps_the_highlight() {
        let state = UiState { active_section: Section::Posts, ..UiState::default() };
        let state = reduce(state, UiAction::Scrolled { progress: 10.0, active: None });
        assert_eq!(state.active_section, Section::Posts);
        assert_eq!(state.scroll_progress, 10.0);
    }

    #[test]
    fn toggle_menu_flips_and_close_menu_clears() {
        let state = reduce(UiState::default(), UiAction::ToggleMenu);
        assert!(state.menu_open);
        let state = reduce(state, UiAction::ToggleMenu);
        assert!(!state.menu_open);

        let open = UiState { menu_open: true, ..UiState::default() };
        assert!(!reduce(open, UiAction::CloseMenu).menu_open);
    }

    #[test]
    fn open_close_and_replace_post() {
        let state = reduce(UiState::default(), UiAction::OpenPost(&POSTS[0]));
        assert_eq!(state.selected_post, Some(&POSTS[0]));

        // Opening another post replaces the selection without closing first
        let state = reduce(state, UiAction::OpenPost(&POSTS[1]));
        assert_eq!(state.selected_post, Some(&POSTS[1]));

        let state = reduce(state, UiAction::ClosePost);
        assert_eq!(state.selected_post, None);

        // Closing with nothing open is a safe no-op
        let state = reduce(state, UiAction::ClosePost);
        assert_eq!(state.selected_post, None);
    }

    #[test]
    fn menu_select_navigates_once_and_closes_the_menu() {
        let mut navigated = Vec::new();
        let action = menu_select(Section::Contact, |s| navigated.push(s));
        assert_eq!(navigated, vec![Section::Contact]);

        let open = UiState { menu_open: true, ..UiState::default() };
        assert!(!reduce(open, action).menu_open);
    }

    #[test]
    fn post_ids_are_unique() {
        for (i, a) in POSTS.iter().enumerate() {
            for b in &POSTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
