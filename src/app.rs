//! Root application module.
//!
//! Contains the main App component, AppContext definition, GalleryState,
//! and application-level setup logic following Leptos conventions.

use folio_core::gallery::{Direction, GalleryInput, GallerySession, ImageRef, Outcome, Transition};
use folio_core::Catalog;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tracing::{error, warn};

use crate::components::{GalleryViewer, ProjectGrid};
use crate::config::{APP_NAME, PROJECTS_HEADING, PROJECTS_TOML, TRANSITION_MS};

// ============================================================================
// GalleryState
// ============================================================================

/// Image that is sliding out while the next one slides in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingFrame {
    pub image: ImageRef,
    pub direction: Direction,
    /// Transition serial; a newer transition supersedes this frame.
    pub serial: u64,
}

/// Gallery viewer state managed with Leptos signals.
///
/// Wraps the single [`GallerySession`] for the whole page. Every input
/// source (keyboard, arrows, thumbnails, close triggers, image decode)
/// goes through [`GalleryState::dispatch`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct GalleryState {
    /// The authoritative session (index, direction, loaded, open).
    pub session: RwSignal<GallerySession>,
    /// Title of the project whose images are shown.
    pub title: RwSignal<Option<String>>,
    /// Frame currently running its exit animation.
    pub outgoing: RwSignal<Option<OutgoingFrame>>,
    serial: StoredValue<u64>,
}

impl GalleryState {
    /// Creates a closed gallery.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(GallerySession::new()),
            title: RwSignal::new(None),
            outgoing: RwSignal::new(None),
            serial: StoredValue::new(0),
        }
    }

    /// Opens the viewer on `images` at `index`.
    ///
    /// A rejected open (empty image list) is logged and leaves the viewer
    /// as it was.
    pub fn open(&self, images: Vec<ImageRef>, index: usize, title: Option<String>) {
        let mut result = Ok(index);
        self.session.maybe_update(|s| {
            result = s.open(images, index);
            result.is_ok()
        });

        match result {
            Ok(_) => {
                self.title.set(title);
                self.outgoing.set(None);
            }
            Err(e) => warn!(error = %e, ?title, "gallery not opened"),
        }
    }

    /// Routes one input through the session.
    ///
    /// Signals are only notified when the input changed something.
    pub fn dispatch(&self, input: GalleryInput) -> Outcome {
        let mut outcome = Outcome::Ignored;
        self.session.maybe_update(|s| {
            outcome = s.handle(input);
            outcome != Outcome::Ignored
        });

        match outcome {
            Outcome::Moved(transition) => self.start_exit(transition),
            Outcome::Closed => self.outgoing.set(None),
            Outcome::Loaded | Outcome::Ignored => {}
        }
        outcome
    }

    /// Keeps the previous image on screen for one transition duration.
    fn start_exit(&self, transition: Transition) {
        let Some(image) = self
            .session
            .with_untracked(|s| s.images().get(transition.from).cloned())
        else {
            return;
        };

        let serial = self.serial.get_value() + 1;
        self.serial.set_value(serial);
        self.outgoing.set(Some(OutgoingFrame {
            image,
            direction: transition.direction,
            serial,
        }));

        let outgoing = self.outgoing;
        Timeout::new(TRANSITION_MS, move || {
            outgoing.maybe_update(|frame| {
                if frame.as_ref().is_some_and(|f| f.serial == serial) {
                    *frame = None;
                    true
                } else {
                    false
                }
            });
        })
        .forget();
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// Holding the gallery here guarantees a single active session for the
/// whole page.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Gallery viewer state.
    pub gallery: GalleryState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            gallery: GalleryState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads the embedded project catalog (errors surface in the ErrorBoundary)
/// - Renders the project grid and the gallery viewer
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #121212;
                    color: #abb2bf;
                    font-family: 'Fira Code', monospace;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "The project list could not be loaded."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #ff6b6b;
                            font-size: 0.9rem;
                            margin-bottom: 2rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #00ff00;
                                color: #121212;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: 'Fira Code', monospace;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <main style="min-height: 100vh; background: #121212;">
                <header style="padding: 1.5rem 1.5rem 0; font-family: 'Fira Code', monospace;">
                    <h1 style="color: #00ff00; font-size: 1.5rem; margin: 0;">{APP_NAME}</h1>
                    <p style="color: #abb2bf; margin: 0.25rem 0 0;">{PROJECTS_HEADING}</p>
                </header>
                {Catalog::from_toml(PROJECTS_TOML)
                    .inspect_err(|e| error!(error = %e, "failed to load project catalog"))
                    .map(|catalog| view! { <ProjectGrid catalog=catalog /> })}
            </main>
            <GalleryViewer />
        </ErrorBoundary>
    }
}
