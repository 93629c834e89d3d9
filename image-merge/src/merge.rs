use crate::{common::*, direction::Direction, error::MergeError};

/// Infers the shape of merging two images without touching their data.
pub fn merged_shape(
    image_one: &Shape,
    image_two: &Shape,
    direction: Direction,
) -> Result<Shape, MergeError> {
    let shape = image_one
        .equalize(image_two)
        .ok_or_else(|| MergeError::ShapeMismatch {
            left: image_one.clone(),
            right: image_two.clone(),
        })?;
    let axis = direction.axis();

    shape
        .concat(&shape, axis)
        .ok_or(MergeError::MissingAxis {
            axis,
            rank: shape.len(),
        })
}

/// Concatenates two equally shaped images along the axis of `direction`.
///
/// The inputs are left untouched and the result is a freshly allocated
/// array in standard layout.
pub fn merge(
    image_one: &Image,
    image_two: &Image,
    direction: Direction,
) -> Result<Image, MergeError> {
    let shape_one = Shape::from(image_one.shape());
    let shape_two = Shape::from(image_two.shape());
    let output_shape = merged_shape(&shape_one, &shape_two, direction)?;
    let axis = direction.axis();

    debug!(
        "merge {} images of shape {} along axis {}",
        direction, shape_one, axis
    );

    let merged = concatenate(Axis(axis), &[image_one.view(), image_two.view()]).map_err(
        |_| MergeError::ShapeMismatch {
            left: shape_one,
            right: shape_two,
        },
    )?;
    debug_assert_eq!(merged.shape(), output_shape.dims());

    Ok(merged)
}

/// Merges two images with the direction given in its external string form.
///
/// The shapes are checked before the direction, so mismatched images are
/// reported as such whatever the direction says. The result is returned as
/// a one-element tuple, matching the node's single declared output.
pub fn execute(
    image_one: &Image,
    image_two: &Image,
    direction: &str,
) -> Result<(Image,), MergeError> {
    if image_one.shape() != image_two.shape() {
        return Err(MergeError::ShapeMismatch {
            left: image_one.shape().into(),
            right: image_two.shape().into(),
        });
    }

    let direction: Direction = direction.parse()?;
    let merged = merge(image_one, image_two, direction)?;
    Ok((merged,))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ArrayD, IxDyn};

    #[test]
    fn merged_shape_per_direction() {
        let shape = Shape::from([3, 100, 100]);
        assert_eq!(
            merged_shape(&shape, &shape, Direction::Horizontal).unwrap(),
            Shape::from([3, 100, 200])
        );
        assert_eq!(
            merged_shape(&shape, &shape, Direction::Vertical).unwrap(),
            Shape::from([3, 200, 100])
        );
    }

    #[test]
    fn merged_shape_requires_equal_shapes() {
        // equal on every axis but the merge axis is still a mismatch
        let err = merged_shape(
            &Shape::from([3, 100, 100]),
            &Shape::from([3, 50, 100]),
            Direction::Vertical,
        )
        .unwrap_err();
        assert!(matches!(err, MergeError::ShapeMismatch { .. }));
    }

    #[test]
    fn merged_shape_requires_axis() {
        let shape = Shape::from([4, 4]);
        assert_eq!(
            merged_shape(&shape, &shape, Direction::Horizontal).unwrap_err(),
            MergeError::MissingAxis { axis: 2, rank: 2 }
        );
        assert_eq!(
            merged_shape(&shape, &shape, Direction::Vertical).unwrap(),
            Shape::from([4, 8])
        );
    }

    #[test]
    fn merge_places_first_image_first() {
        let one = array![[[1.0_f32, 2.0], [3.0, 4.0]]].into_dyn();
        let two = array![[[5.0_f32, 6.0], [7.0, 8.0]]].into_dyn();

        let horizontal = merge(&one, &two, Direction::Horizontal).unwrap();
        assert_eq!(
            horizontal,
            array![[[1.0_f32, 2.0, 5.0, 6.0], [3.0, 4.0, 7.0, 8.0]]].into_dyn()
        );

        let vertical = merge(&one, &two, Direction::Vertical).unwrap();
        assert_eq!(
            vertical,
            array![[[1.0_f32, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]].into_dyn()
        );
    }

    #[test]
    fn merge_four_dimensional_batch() {
        let one = ArrayD::<f32>::zeros(IxDyn(&[2, 8, 6, 3]));
        let two = ArrayD::<f32>::ones(IxDyn(&[2, 8, 6, 3]));

        let merged = merge(&one, &two, Direction::Horizontal).unwrap();
        assert_eq!(merged.shape(), &[2, 8, 12, 3]);
        assert_eq!(merged[[1, 7, 5, 2]], 0.0);
        assert_eq!(merged[[1, 7, 6, 2]], 1.0);
    }

    #[test]
    fn execute_checks_shape_before_direction() {
        let one = ArrayD::<f32>::zeros(IxDyn(&[3, 100, 100]));
        let two = ArrayD::<f32>::zeros(IxDyn(&[3, 50, 100]));

        let err = execute(&one, &two, "diagonal").unwrap_err();
        assert_eq!(
            err,
            MergeError::ShapeMismatch {
                left: Shape::from([3, 100, 100]),
                right: Shape::from([3, 50, 100]),
            }
        );
        assert_eq!(
            err.to_string(),
            "both images must have the same dimensions, got (3, 100, 100) and (3, 50, 100)"
        );
    }
}
