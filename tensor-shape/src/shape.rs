use crate::common::*;

/// The extents of a tensor, ordered from the outermost axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self(dims.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of axes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }

    /// Total number of elements a tensor of this shape holds.
    pub fn num_elements(&self) -> usize {
        self.0.iter().product()
    }

    pub fn size3(&self) -> Option<[usize; 3]> {
        match self.as_ref() {
            &[s1, s2, s3] => Some([s1, s2, s3]),
            _ => None,
        }
    }

    pub fn size4(&self) -> Option<[usize; 4]> {
        match self.as_ref() {
            &[s1, s2, s3, s4] => Some([s1, s2, s3, s4]),
            _ => None,
        }
    }

    /// Returns the common shape if both shapes are exactly equal.
    pub fn equalize(&self, other: &Shape) -> Option<Shape> {
        (self == other).then(|| self.clone())
    }

    /// Infers the shape of joining `self` and `other` along `axis`.
    ///
    /// Both shapes must have the same rank and agree on every axis except
    /// `axis`, which must exist.
    pub fn concat(&self, other: &Shape, axis: usize) -> Option<Shape> {
        if self.len() != other.len() || axis >= self.len() {
            return None;
        }

        let dims: Option<Vec<usize>> = self
            .0
            .iter()
            .zip(other.0.iter())
            .enumerate()
            .map(|(index, (&lhs, &rhs))| {
                if index == axis {
                    Some(lhs + rhs)
                } else if lhs == rhs {
                    Some(lhs)
                } else {
                    None
                }
            })
            .collect();

        Some(Self(dims?))
    }
}

impl From<Vec<usize>> for Shape {
    fn from(from: Vec<usize>) -> Self {
        Self(from)
    }
}

impl From<&[usize]> for Shape {
    fn from(from: &[usize]) -> Self {
        Self(from.to_vec())
    }
}

impl<const SIZE: usize> From<[usize; SIZE]> for Shape {
    fn from(from: [usize; SIZE]) -> Self {
        Self(from.to_vec())
    }
}

impl From<Shape> for Vec<usize> {
    fn from(from: Shape) -> Self {
        from.0
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = usize>,
    {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl Index<usize> for Shape {
    type Output = usize;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.0[axis]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("()");
        }

        let mut tuple = f.debug_tuple("");
        self.0.iter().for_each(|dim| {
            tuple.field(dim);
        });
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_along_axis() {
        let lhs = Shape::from([3, 100, 100]);
        let rhs = Shape::from([3, 100, 100]);

        assert_eq!(lhs.concat(&rhs, 1), Some(Shape::from([3, 200, 100])));
        assert_eq!(lhs.concat(&rhs, 2), Some(Shape::from([3, 100, 200])));
    }

    #[test]
    fn concat_rejects_incompatible_shapes() {
        let lhs = Shape::from([3, 100, 100]);

        // differing size off the concatenation axis
        assert_eq!(lhs.concat(&Shape::from([3, 100, 50]), 1), None);
        // differing rank
        assert_eq!(lhs.concat(&Shape::from([3, 100]), 1), None);
        // missing axis
        assert_eq!(lhs.concat(&lhs, 3), None);
    }

    #[test]
    fn concat_allows_differing_size_on_axis() {
        let lhs = Shape::from([1, 50, 100, 3]);
        let rhs = Shape::from([1, 70, 100, 3]);
        assert_eq!(lhs.concat(&rhs, 1), Some(Shape::from([1, 120, 100, 3])));
    }

    #[test]
    fn equalize_requires_exact_match() {
        let lhs = Shape::from([3, 100, 100]);
        assert_eq!(lhs.equalize(&lhs.clone()), Some(lhs.clone()));
        assert_eq!(lhs.equalize(&Shape::from([3, 50, 100])), None);
    }

    #[test]
    fn display_as_tuple() {
        assert_eq!(Shape::from([3, 100, 200]).to_string(), "(3, 100, 200)");
        assert_eq!(Shape::from([7]).to_string(), "(7,)");
        assert_eq!(Shape::new(Vec::<usize>::new()).to_string(), "()");
    }

    #[test]
    fn sizes() {
        let shape = Shape::from([2, 4, 6, 3]);
        assert_eq!(shape.size4(), Some([2, 4, 6, 3]));
        assert_eq!(shape.size3(), None);
        assert_eq!(shape.num_elements(), 144);
        assert_eq!(shape.dim(2), Some(6));
        assert_eq!(shape.dim(4), None);
    }

    #[test]
    fn serialize_transparent() {
        let shape = Shape::from([3, 100, 100]);
        let text = serde_json::to_string(&shape).unwrap();
        assert_eq!(text, "[3,100,100]");
        let parsed: Shape = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, shape);
    }
}
