//! An ordered collection of blocks laid out by a pluggable arrangement.
use crate::LayoutError;
use crate::arrangement::{Arrangement, BorderArrangement, Position};
use crate::block::Block;
use crate::box_model::BoxModel;
use charta_types::{Size, SizeConstraint};

/// One child of a [`BlockContainer`]: the block plus the placement key it
/// was added with.
#[derive(Debug)]
pub struct Child {
    pub block: Box<dyn Block>,
    position: Position,
}

impl Child {
    pub fn position(&self) -> Position {
        self.position
    }
}

/// A region holding an ordered list of child blocks and exactly one
/// arrangement that sizes and places them.
///
/// The container owns the only copy of the child list; arrangements keep at
/// most indices into it. Every mutation of the list is mirrored into the
/// arrangement (`add`/`clear`) so the two never drift apart.
#[derive(Debug)]
pub struct BlockContainer {
    box_model: BoxModel,
    arrangement: Box<dyn Arrangement>,
    children: Vec<Child>,
}

impl Default for BlockContainer {
    fn default() -> Self {
        Self::new(BorderArrangement::new())
    }
}

impl BlockContainer {
    pub fn new(arrangement: impl Arrangement + 'static) -> Self {
        Self {
            box_model: BoxModel::new(),
            arrangement: Box::new(arrangement),
            children: Vec::new(),
        }
    }

    /// Adds a child in the default (center) position.
    pub fn add(&mut self, block: impl Block + 'static) {
        self.add_positioned(block, Position::Center);
    }

    /// Adds a child tagged with a placement key. Only the border
    /// arrangement distinguishes positions; the others lay children out in
    /// insertion order.
    pub fn add_positioned(&mut self, block: impl Block + 'static, position: Position) {
        self.children.push(Child {
            block: Box::new(block),
            position,
        });
        self.arrangement.add(self.children.len() - 1, position);
    }

    /// Removes every child, resetting the arrangement's state symmetrically.
    pub fn clear(&mut self) {
        self.children.clear();
        self.arrangement.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Swaps the arrangement. The new strategy is reset and re-fed the
    /// existing children with their stored positions; it never inherits the
    /// previous strategy's internal slots.
    pub fn set_arrangement(&mut self, arrangement: impl Arrangement + 'static) {
        let mut arrangement: Box<dyn Arrangement> = Box::new(arrangement);
        arrangement.clear();
        for (index, child) in self.children.iter().enumerate() {
            arrangement.add(index, child.position);
        }
        self.arrangement = arrangement;
    }
}

impl Block for BlockContainer {
    fn box_model(&self) -> &BoxModel {
        &self.box_model
    }

    fn box_model_mut(&mut self) -> &mut BoxModel {
        &mut self.box_model
    }

    fn arrange(&mut self, constraint: &SizeConstraint) -> Result<Size, LayoutError> {
        log::debug!(
            "arranging container of {} children under {constraint:?}",
            self.children.len()
        );
        let content_constraint = self.box_model.to_content_constraint(constraint);
        let content = self
            .arrangement
            .arrange(&mut self.children, &content_constraint)?;
        Ok(Size::new(
            self.box_model.calculate_total_width(content.width),
            self.box_model.calculate_total_height(content.height),
        ))
    }
}
