use super::super::*;

impl Grid {
    /// Material at a probe position, `None` off the grid.
    /// Every rule probes neighbors through this, so the border acts as a wall.
    #[inline]
    pub fn material(&self, x: i32, y: i32) -> Option<Material> {
        self.get(x, y).map(|c| c.material())
    }

    #[inline]
    pub fn material_is(&self, x: i32, y: i32, material: Material) -> bool {
        self.material(x, y) == Some(material)
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.material_is(x, y, Material::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::*;

    #[test]
    fn off_grid_is_never_empty() {
        let grid = Grid::new(2, 2);
        assert!(grid.is_empty(0, 0));
        assert!(!grid.is_empty(-1, 0));
        assert!(!grid.is_empty(0, 2));
        assert_eq!(grid.material(5, 5), None);
    }
}
