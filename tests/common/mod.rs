pub type TestResult = Result<(), Box<dyn std::error::Error>>;

use charta::{
    BlockContainer, BorderArrangement, ColumnArrangement, EmptyBlock, FlowArrangement, Position,
};

/// A legend-like row of equally sized entries.
pub fn legend_row(entries: usize, entry_width: f32, entry_height: f32, gap: f32) -> BlockContainer {
    let mut container = BlockContainer::new(FlowArrangement::new(gap, gap));
    for _ in 0..entries {
        container.add(EmptyBlock::new(entry_width, entry_height));
    }
    container
}

/// A legend-like column of equally sized entries.
pub fn legend_column(
    entries: usize,
    entry_width: f32,
    entry_height: f32,
    gap: f32,
) -> BlockContainer {
    let mut container = BlockContainer::new(ColumnArrangement::new(gap, gap));
    for _ in 0..entries {
        container.add(EmptyBlock::new(entry_width, entry_height));
    }
    container
}

/// A chart-shaped frame: title on top, legend on the right, plot in the
/// center.
pub fn chart_frame(title_height: f32, legend_width: f32) -> BlockContainer {
    let mut chart = BlockContainer::new(BorderArrangement::new());
    chart.add_positioned(EmptyBlock::new(120.0, title_height), Position::Top);
    chart.add_positioned(EmptyBlock::new(legend_width, 60.0), Position::Right);
    chart.add(EmptyBlock::new(200.0, 150.0));
    chart
}
