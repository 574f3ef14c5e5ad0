//! # Static Content
//!
//! Everything the studio displays that never changes at runtime: the
//! `chainforge.py` source, the system instruction sent with every simulation
//! request, the ASCII banner, the home feature cards and the documentation
//! sections (see [`docs`]).
//!
//! The text lives under `assets/` and is compiled in with `include_str!`, so
//! the binary has no runtime file dependencies.

pub mod docs;

pub use docs::{CodeSample, ConceptCard, DocSection, CONCEPTS, SECTIONS};

/// Product name shown in the sidebar and the header.
pub const PRODUCT_NAME: &str = "ChainForge";

/// Version tag shown under the product name.
pub const PRODUCT_VERSION: &str = "v0.1.0-alpha";

/// Project link shown at the bottom of the sidebar.
pub const PROJECT_LINK: &str = "github.com/chainforge";

/// The complete single-file ChainForge implementation shown on the Source screen.
pub const SOURCE_CODE: &str = include_str!("../../assets/chainforge.py");

/// Fixed system instruction that steers the model into printing a fake
/// ChainForge agent transcript.
pub const SYSTEM_INSTRUCTION: &str = include_str!("../../assets/system_instruction.txt");

/// ASCII-art banner for the Home screen.
pub const BANNER: &str = include_str!("../../assets/banner.txt");

/// Two-line headline on the Home screen.
pub const HEADLINE: [&str; 2] = ["Build AI Chains", "In Pure Python"];

pub const TAGLINE: &str = "ChainForge is a lightweight, type-safe, and asynchronous framework for \
building LLM applications. Designed for production with Pydantic and Asyncio.";

/// A feature card on the Home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Type-Safe",
        body: "Built on Pydantic and Python 3.12+ type hints for robust developer experience.",
    },
    Feature {
        title: "Async Native",
        body: "Built from the ground up with asyncio for high-performance concurrent chains.",
    },
    Feature {
        title: "Zero Fluff",
        body: "Minimal abstractions. Single file drop-in or pip installable package.",
    },
];
