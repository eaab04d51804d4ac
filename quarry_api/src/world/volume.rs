//! Biome Volumes
//!
//! A biome volume answers "what biome is at this position" over an axis-
//! aligned box of blocks. Mutable volumes additionally accept writes;
//! [`UnmodifiableBiomeVolume`] projects any volume down to its read half so
//! it can be lent out without lending the writes.
use quarry_data::{BlockPos, CatalogKey};

/// Read access to the biomes of a bounded volume.
pub trait BiomeVolume {
    /// The lowest corner contained in the volume.
    fn min(&self) -> BlockPos;

    /// The highest corner contained in the volume.
    fn max(&self) -> BlockPos;

    /// The biome at `pos`, or `None` outside the volume.
    fn biome_at(&self, pos: BlockPos) -> Option<&CatalogKey>;

    /// Whether `pos` falls inside the volume's bounds.
    fn contains(&self, pos: BlockPos) -> bool {
        let min = self.min();
        let max = self.max();
        (min.x..=max.x).contains(&pos.x) && (min.y..=max.y).contains(&pos.y) && (min.z..=max.z).contains(&pos.z)
    }

    /// Borrow this volume as a read-only view.
    fn as_unmodifiable(&self) -> UnmodifiableBiomeVolume<'_, Self>
    where
        Self: Sized,
    {
        UnmodifiableBiomeVolume { inner: self }
    }
}

/// A biome volume that also accepts writes.
pub trait BiomeVolumeMut: BiomeVolume {
    /// Set the biome at `pos`. Returns `false` when `pos` is outside the
    /// volume, leaving it unchanged.
    fn set_biome(&mut self, pos: BlockPos, biome: CatalogKey) -> bool;
}

/// A borrowing view of a volume that exposes only its read half.
///
/// The parent may well be a [`BiomeVolumeMut`]; through this view it is not.
#[derive(Debug, Clone, Copy)]
pub struct UnmodifiableBiomeVolume<'a, V: BiomeVolume> {
    inner: &'a V,
}

impl<V: BiomeVolume> BiomeVolume for UnmodifiableBiomeVolume<'_, V> {
    fn min(&self) -> BlockPos {
        self.inner.min()
    }

    fn max(&self) -> BlockPos {
        self.inner.max()
    }

    fn biome_at(&self, pos: BlockPos) -> Option<&CatalogKey> {
        self.inner.biome_at(pos)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// A small box of blocks with a default biome and per-position overrides.
    struct BoxVolume {
        min: BlockPos,
        max: BlockPos,
        fallback: CatalogKey,
        overrides: HashMap<(i32, i32, i32), CatalogKey>,
    }

    impl BoxVolume {
        fn new(min: BlockPos, max: BlockPos) -> BoxVolume {
            BoxVolume {
                min,
                max,
                fallback: CatalogKey::parse("quarry:plains").unwrap(),
                overrides: HashMap::new(),
            }
        }
    }

    impl BiomeVolume for BoxVolume {
        fn min(&self) -> BlockPos {
            self.min
        }

        fn max(&self) -> BlockPos {
            self.max
        }

        fn biome_at(&self, pos: BlockPos) -> Option<&CatalogKey> {
            if !self.contains(pos) {
                return None;
            }
            Some(self.overrides.get(&(pos.x, pos.y, pos.z)).unwrap_or(&self.fallback))
        }
    }

    impl BiomeVolumeMut for BoxVolume {
        fn set_biome(&mut self, pos: BlockPos, biome: CatalogKey) -> bool {
            if !self.contains(pos) {
                return false;
            }
            self.overrides.insert((pos.x, pos.y, pos.z), biome);
            true
        }
    }

    fn test_volume() -> BoxVolume {
        BoxVolume::new(BlockPos::new(0, 0, 0), BlockPos::new(15, 255, 15))
    }

    #[test]
    fn contains_checks_all_three_axes() {
        let volume = test_volume();
        assert!(volume.contains(BlockPos::new(0, 0, 0)));
        assert!(volume.contains(BlockPos::new(15, 255, 15)));
        assert!(!volume.contains(BlockPos::new(16, 0, 0)));
        assert!(!volume.contains(BlockPos::new(0, -1, 0)));
        assert!(!volume.contains(BlockPos::new(0, 0, 16)));
    }

    #[test]
    fn reads_inside_hit_and_outside_miss() {
        let mut volume = test_volume();
        let swamp = CatalogKey::parse("quarry:swamp").unwrap();
        assert!(volume.set_biome(BlockPos::new(3, 64, 3), swamp.clone()));

        assert_eq!(volume.biome_at(BlockPos::new(3, 64, 3)), Some(&swamp));
        assert_eq!(
            volume.biome_at(BlockPos::new(0, 0, 0)).unwrap().to_string(),
            "quarry:plains"
        );
        assert_eq!(volume.biome_at(BlockPos::new(99, 0, 0)), None);
    }

    #[test]
    fn writes_outside_the_bounds_are_refused() {
        let mut volume = test_volume();
        let swamp = CatalogKey::parse("quarry:swamp").unwrap();
        assert!(!volume.set_biome(BlockPos::new(-1, 0, 0), swamp));
    }

    #[test]
    fn unmodifiable_view_delegates_reads() {
        let mut volume = test_volume();
        let swamp = CatalogKey::parse("quarry:swamp").unwrap();
        volume.set_biome(BlockPos::new(1, 1, 1), swamp.clone());

        let view = volume.as_unmodifiable();
        assert_eq!(view.min(), BlockPos::new(0, 0, 0));
        assert_eq!(view.max(), BlockPos::new(15, 255, 15));
        assert_eq!(view.biome_at(BlockPos::new(1, 1, 1)), Some(&swamp));
        assert!(view.contains(BlockPos::new(8, 8, 8)));

        // the view of a view still reads through
        let nested = view.as_unmodifiable();
        assert_eq!(nested.biome_at(BlockPos::new(1, 1, 1)), Some(&swamp));
    }
}
