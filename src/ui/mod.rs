/// UI layer: sidebar/top-bar widgets and the central dashboard.
pub mod charts;
pub mod panels;
