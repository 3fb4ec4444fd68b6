//! Navigation model for the site.
//!
//! The browser runtime for this lives in `static/js/nav.js`; this module is
//! the canonical description of what that script is allowed to do. The web
//! handlers also use it to decide which nav entry a server-rendered page
//! highlights. Three pieces:
//!
//! - [`View`]: which top-level screen is showing, mapped to routes.
//! - [`NavState`]: the router. Anchor navigation on the landing view scrolls
//!   directly; from any other view it records a pending target, switches to
//!   landing, and performs the scroll once the landing DOM has settled.
//!   Leaving landing before settling cancels the pending scroll.
//! - [`ScrollSpy`]: maps viewport-intersection events on landing sections
//!   back to the active nav label.

use std::str::FromStr;

/// One entry in the top navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Nav entries in display order. Anchors are element ids on the landing page.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "HOME", anchor: "home" },
    NavItem { label: "ABOUT US", anchor: "about" },
    NavItem { label: "INITIATIVES", anchor: "initiatives" },
    NavItem { label: "BLOGS", anchor: "blogs" },
    NavItem { label: "SPONSORS", anchor: "sponsors" },
    NavItem { label: "GALLERY", anchor: "gallery" },
    NavItem { label: "JOIN US", anchor: "join" },
];

/// Sections the scroll spy watches, in document order.
pub const SPY_SECTIONS: &[(&str, &str)] = &[
    ("home", "HOME"),
    ("about", "ABOUT US"),
    ("initiatives", "INITIATIVES"),
    ("blogs", "BLOGS"),
    ("gallery", "GALLERY"),
    ("sponsors", "SPONSORS"),
    ("join", "JOIN US"),
];

pub fn label_for_section(section_id: &str) -> Option<&'static str> {
    SPY_SECTIONS
        .iter()
        .find(|(id, _)| *id == section_id)
        .map(|(_, label)| *label)
}

pub const AUTH_LABEL: &str = "AUTH";
pub const DASHBOARD_LABEL: &str = "DASHBOARD";

/// Top-level screens.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum View {
    #[default]
    Landing,
    Teams,
    Blogs,
    Auth,
    Dashboard,
}

impl View {
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Teams => "/team",
            Self::Blogs => "/blog",
            Self::Auth => "/login",
            Self::Dashboard => "/admin",
        }
    }

    /// The label a view forces onto the nav bar, if any. The landing view
    /// leaves the label to the scroll spy.
    pub fn pinned_label(&self) -> Option<&'static str> {
        match self {
            Self::Auth => Some(AUTH_LABEL),
            Self::Dashboard => Some(DASHBOARD_LABEL),
            _ => None,
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(Self::Landing),
            "teams" => Ok(Self::Teams),
            "blogs" => Ok(Self::Blogs),
            "auth" => Ok(Self::Auth),
            "dashboard" => Ok(Self::Dashboard),
            _ => Err(format!("invalid view: {}", s)),
        }
    }
}

/// Side effect the runtime must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Smooth-scroll the document back to the top.
    ScrollToTop,
    /// Smooth-scroll to the landing section with this id. Ids that do not
    /// resolve to an element are ignored by the runtime.
    ScrollToAnchor(String),
}

/// The view router. All transitions are synchronous; the only deferred work
/// is the pending scroll target, which the runtime consumes via [`settle`]
/// after the landing DOM has mounted (~100ms).
///
/// [`settle`]: NavState::settle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    view: View,
    active_label: String,
    pending_scroll: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            active_label: "HOME".to_string(),
            pending_scroll: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_label(&self) -> &str {
        &self.active_label
    }

    pub fn pending_scroll(&self) -> Option<&str> {
        self.pending_scroll.as_deref()
    }

    /// A nav-bar click targeting a landing anchor. On landing this scrolls
    /// immediately; elsewhere the anchor is parked and the view switches to
    /// landing so [`settle`](Self::settle) can finish the job.
    pub fn navigate(&mut self, anchor: &str) -> Effect {
        if self.view == View::Landing {
            Effect::ScrollToAnchor(anchor.to_string())
        } else {
            self.pending_scroll = Some(anchor.to_string());
            self.view = View::Landing;
            Effect::None
        }
    }

    /// An explicit view switch. Always resets scroll position; auth and
    /// dashboard pin their label. Switching anywhere but landing drops any
    /// pending scroll so it cannot fire against the wrong screen.
    pub fn switch_view(&mut self, view: View) -> Effect {
        self.view = view;
        if let Some(label) = view.pinned_label() {
            self.active_label = label.to_string();
        }
        if view != View::Landing {
            self.pending_scroll = None;
        }
        Effect::ScrollToTop
    }

    /// Called once the landing DOM has settled. Consumes the pending target
    /// exactly once; a no-op on other views or with nothing pending.
    pub fn settle(&mut self) -> Effect {
        if self.view != View::Landing {
            return Effect::None;
        }
        match self.pending_scroll.take() {
            Some(anchor) => Effect::ScrollToAnchor(anchor),
            None => Effect::None,
        }
    }

    /// Scroll-spy feedback: a section entered the active band.
    pub fn section_entered(&mut self, section_id: &str) {
        if self.view != View::Landing {
            return;
        }
        if let Some(label) = label_for_section(section_id) {
            self.active_label = label.to_string();
        }
    }
}

/// Fraction of the viewport height above the active band. Mirrors the
/// observer's rootMargin of -20% at the top.
pub const SPY_BAND_TOP: f64 = 0.20;

/// Fraction of the viewport height below the active band (-70% at the
/// bottom), leaving a band over the upper portion of the viewport so a
/// section counts as active once it has scrolled near the top.
pub const SPY_BAND_BOTTOM: f64 = 0.70;

/// Zero-area threshold: a section intersects the band as soon as any part
/// of it overlaps, matching an IntersectionObserver threshold of 0.
pub fn intersects_active_band(
    viewport_height: f64,
    scroll_y: f64,
    section_top: f64,
    section_bottom: f64,
) -> bool {
    let band_top = scroll_y + viewport_height * SPY_BAND_TOP;
    let band_bottom = scroll_y + viewport_height * (1.0 - SPY_BAND_BOTTOM);
    section_top < band_bottom && section_bottom > band_top
}

/// One observer callback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry<'a> {
    pub section_id: &'a str,
    pub is_intersecting: bool,
}

/// Folds intersection events into the nav state while connected. Multiple
/// sections may report in one batch during fast scrolling; entries are
/// applied in order, so the last intersecting section wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollSpy {
    connected: bool,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self { connected: true }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn on_intersections(&self, nav: &mut NavState, entries: &[IntersectionEntry<'_>]) {
        if !self.connected {
            return;
        }
        for entry in entries {
            if entry.is_intersecting {
                nav.section_entered(entry.section_id);
            }
        }
    }

    /// Stop observing. Must be called when the landing view unmounts so no
    /// callback fires against a torn-down page.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}
