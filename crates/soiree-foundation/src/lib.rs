//! Headless behaviour for the Soiree site.
//!
//! Every page behaviour is a small state machine owned by a single instance.
//! Inputs arrive as method calls with explicit timestamps and measurements;
//! outputs are plain values the platform layer writes back to the DOM. None
//! of it needs a browser, which keeps it testable on the host.

pub mod accordion;
pub mod carousel;
pub mod contact;
pub mod counter;
pub mod debounce;
pub mod gesture_constants;
pub mod lightbox;
pub mod logo;
pub mod nav;
pub mod parallax;
pub mod playback;
pub mod reveal;
pub mod sticky;
pub mod typewriter;
pub mod velocity;

pub use accordion::Accordion;
pub use carousel::{CardGeometry, Carousel, CarouselConfig, CarouselPhase};
pub use contact::{
    ContactError, ContactMessages, ContactRequest, EmailRequest, EmailSettings,
};
pub use counter::{CounterFrame, StatCounter};
pub use debounce::Debouncer;
pub use lightbox::Lightbox;
pub use logo::{LogoSet, PageKind};
pub use nav::MobileNav;
pub use parallax::{FrameThrottle, ParallaxRows};
pub use playback::{PlaybackCommand, PlaybackGate};
pub use reveal::{RevealGroup, RevealSchedule, RevealSpec, RevealStep};
pub use sticky::{StickyConfig, StickyLayout, StickyPosition};
pub use typewriter::{Typewriter, TypewriterConfig};
pub use velocity::{PointerSample, VelocitySampler};
