mod footer_bar;
mod header_bar;
mod help_overlay;
mod rag_diagram;
mod slide_view;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use help_overlay::{HelpOverlay, HelpOverlayStyle};
pub use rag_diagram::{DiagramMode, RagDiagram, RagDiagramStyle, SimulationMode};
pub use slide_view::{SlideView, SlideViewStyle};
