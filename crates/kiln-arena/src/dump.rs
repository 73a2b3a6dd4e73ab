//! Diagnostic rendering of region state.
//!
//! [`RegionDump`] is a `Display` adapter over one region's metadata and raw
//! buffer contents. It is decoupled from any particular sink — print it,
//! log it, or capture it in a string for differential comparison.

use std::fmt;

use crate::region::Region;

/// Words rendered per line of buffer contents.
const WORDS_PER_LINE: usize = 20;

/// Display adapter for one region's metadata and raw contents.
///
/// Produced by [`Arena::dump`](crate::Arena::dump). The rendering shows the
/// region's chain position, cursor, capacity, and successor, followed by the
/// full buffer as hex words, 20 per line, or a blank marker if the region
/// was never materialised.
pub struct RegionDump<'a> {
    index: usize,
    region: &'a Region,
    next: Option<usize>,
}

impl<'a> RegionDump<'a> {
    pub(crate) fn new(index: usize, region: &'a Region, next: Option<usize>) -> Self {
        Self {
            index,
            region,
            next,
        }
    }
}

impl fmt::Display for RegionDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "region:   {}", self.index)?;
        writeln!(f, "used:     {}", self.region.used())?;
        writeln!(f, "capacity: {}", self.region.capacity())?;
        match self.next {
            Some(next) => writeln!(f, "next:     {next}")?,
            None => writeln!(f, "next:     none")?,
        }
        writeln!(f, "== region contents ==")?;

        if !self.region.has_buffer() {
            return writeln!(f, "region is blank");
        }

        let capacity = self.region.capacity();
        for (i, word) in self.region.slice(0, capacity).iter().enumerate() {
            if (i + 1) % WORDS_PER_LINE == 0 {
                writeln!(f, "{word:#x}")?;
            } else {
                write!(f, "{word:#x} ")?;
            }
        }
        if capacity % WORDS_PER_LINE != 0 {
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, ArenaConfig};

    #[test]
    fn blank_region_renders_marker() {
        let arena = Arena::with_config(ArenaConfig::new(16));
        let rendered = arena.dump(0).unwrap().to_string();
        assert!(rendered.contains("region:   0"));
        assert!(rendered.contains("capacity: 0"));
        assert!(rendered.contains("next:     none"));
        assert!(rendered.contains("region is blank"));
    }

    #[test]
    fn active_region_renders_metadata_and_words() {
        let mut arena = Arena::with_config(ArenaConfig::new(16));
        let handle = arena.alloc(14).unwrap();
        arena.slice_mut(handle)[0] = 0xff;

        let rendered = arena.dump(0).unwrap().to_string();
        assert!(rendered.contains("used:     4"));
        assert!(rendered.contains("capacity: 16"));
        assert!(rendered.contains("0xff"));
    }

    #[test]
    fn chained_region_points_at_its_successor() {
        let mut arena = Arena::with_config(ArenaConfig::new(16));
        arena.alloc(60).unwrap();
        arena.alloc(60).unwrap();
        let head = arena.dump(0).unwrap().to_string();
        let tail = arena.dump(1).unwrap().to_string();
        assert!(head.contains("next:     1"));
        assert!(tail.contains("next:     none"));
    }

    #[test]
    fn contents_wrap_at_twenty_words() {
        let mut arena = Arena::with_config(ArenaConfig::new(40));
        arena.alloc(8).unwrap();
        let rendered = arena.dump(0).unwrap().to_string();
        let contents = rendered.split("== region contents ==").nth(1).unwrap();
        // 40 words at 20 per line: two full lines.
        assert_eq!(contents.trim_end().lines().filter(|l| !l.is_empty()).count(), 2);
    }

    #[test]
    fn out_of_range_index_yields_none() {
        let arena = Arena::with_config(ArenaConfig::new(16));
        assert!(arena.dump(1).is_none());
    }
}
