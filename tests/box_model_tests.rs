mod common;

use charta::{
    Block, BlockContainer, BlockFrame, BoxModel, EmptyBlock, FlowArrangement, Insets, Size,
    SizeConstraint,
};
use common::TestResult;

#[test]
fn trim_and_total_round_trip_for_any_content_width() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut model = BoxModel::new();
    model.margin = Insets::new(4.0, 6.0, 4.0, 6.0);
    model.frame = BlockFrame::uniform(1.5);
    model.padding = Insets::all(2.0);

    for content in [0.0, 0.5, 10.0, 99.25, 1234.0] {
        assert_eq!(
            model.trim_to_content_width(model.calculate_total_width(content)),
            content
        );
        assert_eq!(
            model.trim_to_content_height(model.calculate_total_height(content)),
            content
        );
    }
}

#[test]
fn relative_insets_round_trip_too() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut model = BoxModel::new();
    model.margin = Insets::relative(0.125, 0.25, 0.125, 0.25);

    let total = model.calculate_total_width(160.0);
    assert_eq!(total, 320.0);
    assert_eq!(model.trim_to_content_width(total), 160.0);
}

#[test]
fn container_insets_shrink_what_children_see() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = BlockContainer::new(FlowArrangement::new(0.0, 0.0));
    container.box_model_mut().margin = Insets::all(10.0);
    container.box_model_mut().frame = BlockFrame::uniform(2.0);
    container.box_model_mut().padding = Insets::all(3.0);
    // far wider than the content box, so it gets clipped to it
    container.add(EmptyBlock::new(1000.0, 10.0));

    let size = container.arrange(&SizeConstraint::new(100.0, 80.0))?;
    assert_eq!(size, Size::new(100.0, 80.0));
    // 100 outer minus 15 of insets per side
    assert_eq!(container.children()[0].block.bounds().width, 70.0);
    Ok(())
}

#[test]
fn leaf_insets_extend_the_reported_size() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut spacer = EmptyBlock::new(20.0, 10.0);
    spacer.box_model_mut().margin = Insets::all(5.0);
    spacer.box_model_mut().frame = BlockFrame::uniform(1.0);

    let size = spacer.arrange(&SizeConstraint::UNCONSTRAINED)?;
    assert_eq!(size, Size::new(32.0, 22.0));
    Ok(())
}

#[test]
fn insets_deserialize_from_config_shorthand() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let margin: Insets = serde_json::from_str("\"4pt 6pt\"")?;
    assert_eq!(margin, Insets::new(4.0, 6.0, 4.0, 6.0));

    let mut block = EmptyBlock::new(50.0, 20.0);
    block.box_model_mut().margin = margin;
    let size = block.arrange(&SizeConstraint::UNCONSTRAINED)?;
    assert_eq!(size, Size::new(62.0, 28.0));

    let padding: Insets = serde_json::from_str("\"1cm\"")?;
    assert_eq!(padding, Insets::all(28.35));
    Ok(())
}

#[test]
fn oversized_insets_clamp_content_to_zero_without_failing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = BlockContainer::new(FlowArrangement::new(0.0, 0.0));
    container.box_model_mut().padding = Insets::all(60.0);
    container.add(EmptyBlock::new(10.0, 10.0));

    // padding alone exceeds the fixed size; the content box floors at zero
    // and the reported size is the insets themselves
    let size = container.arrange(&SizeConstraint::new(100.0, 100.0))?;
    assert_eq!(size, Size::new(120.0, 120.0));
    assert_eq!(container.children()[0].block.bounds().width, 0.0);
    Ok(())
}
