use crate::hex::coordinates::HexCoordinate;
use std::collections::{hash_map::Entry, HashMap};

/// Sparse grid holding one `H` per occupied cell.
#[derive(Clone, Debug)]
pub struct HexHashStorage<H> {
    hexes: HashMap<HexCoordinate, H>,
}

impl<H> Default for HexHashStorage<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> HexHashStorage<H> {
    pub fn new() -> Self {
        Self {
            hexes: HashMap::new(),
        }
    }

    pub fn get(&self, position: HexCoordinate) -> Option<&H> {
        self.hexes.get(&position)
    }

    pub fn get_mut(&mut self, position: HexCoordinate) -> Option<&mut H> {
        self.hexes.get_mut(&position)
    }

    pub fn contains_position(&self, position: HexCoordinate) -> bool {
        self.hexes.contains_key(&position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HexCoordinate, &H)> {
        self.hexes.iter().map(|(position, hex)| (*position, hex))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (HexCoordinate, &mut H)> {
        self.hexes.iter_mut().map(|(position, hex)| (*position, hex))
    }

    pub fn positions<'a>(&'a self) -> impl 'a + Iterator<Item = HexCoordinate> {
        self.hexes.keys().cloned()
    }

    pub fn hexes(&self) -> impl Iterator<Item = &H> {
        self.hexes.values()
    }

    pub fn hexes_mut(&mut self) -> impl Iterator<Item = &mut H> {
        self.hexes.values_mut()
    }

    pub fn insert(&mut self, position: HexCoordinate, hex: H) -> Option<H> {
        self.hexes.insert(position, hex)
    }

    pub fn remove(&mut self, position: HexCoordinate) -> Option<H> {
        self.hexes.remove(&position)
    }

    pub fn clear(&mut self) {
        self.hexes.clear();
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn entry(&mut self, position: HexCoordinate) -> Entry<'_, HexCoordinate, H> {
        self.hexes.entry(position)
    }

    /// Occupied neighbors of `position`, in direction order.
    pub fn neighbors<'a>(
        &'a self,
        position: HexCoordinate,
    ) -> impl 'a + Iterator<Item = HexCoordinate> {
        position
            .all_neighbors()
            .filter(move |neighbor| self.contains_position(*neighbor))
    }

    pub fn degree(&self, position: HexCoordinate) -> usize {
        self.neighbors(position).count()
    }

    /// Every pair of occupied adjacent cells, once.
    pub fn edges<'a>(&'a self) -> impl 'a + Iterator<Item = (HexCoordinate, HexCoordinate)> {
        self.positions().flat_map(move |position| {
            self.neighbors(position)
                .filter(move |neighbor| position < *neighbor)
                .map(move |neighbor| (position, neighbor))
        })
    }
}

#[cfg(test)]
use maplit::hashset;
#[cfg(test)]
use std::collections::HashSet;

#[test]
fn test_hex_hash_storage_should_give_access_to_hex() {
    #[derive(PartialEq, Eq, Debug)]
    struct Hex {
        value: usize,
    }
    let mut storage = HexHashStorage::new();
    storage.insert(HexCoordinate::from_axial(12, -42), Hex { value: 42 });
    assert_eq!(
        storage.get(HexCoordinate::from_axial(12, -42)),
        Some(&Hex { value: 42 })
    );
    assert_eq!(storage.get(HexCoordinate::default()), None);
    assert!(storage.contains_position(HexCoordinate::from_axial(12, -42)));
    assert!(!storage.contains_position(HexCoordinate::default()));

    assert_eq!(storage.len(), 1);
    assert!(!storage.is_empty());
}

#[test]
fn test_hex_hash_storage_should_give_mutable_access_to_hex() {
    #[derive(PartialEq, Eq, Debug)]
    struct Hex {
        value: usize,
    }
    let mut storage = HexHashStorage::new();
    storage.insert(HexCoordinate::from_axial(12, -42), Hex { value: 42 });
    storage
        .get_mut(HexCoordinate::from_axial(12, -42))
        .unwrap()
        .value = 12;
    assert_eq!(storage.get_mut(HexCoordinate::default()), None);
    assert_eq!(
        storage.get(HexCoordinate::from_axial(12, -42)),
        Some(&Hex { value: 12 })
    );
    for hex in storage.hexes_mut() {
        hex.value += 1;
    }
    assert_eq!(
        storage.hexes().map(|hex| hex.value).collect::<Vec<_>>(),
        vec![13]
    );
}

#[test]
fn test_hex_hash_storage_overwrite_and_remove() {
    let mut storage = HexHashStorage::new();
    let position = HexCoordinate::from_axial(-5, 24);
    assert_eq!(storage.insert(position, 93), None);
    assert_eq!(storage.insert(position, 7), Some(93));
    assert_eq!(storage.len(), 1);
    *storage.entry(HexCoordinate::default()).or_insert(0) += 1;
    assert_eq!(storage.get(HexCoordinate::default()), Some(&1));
    assert_eq!(storage.remove(position), Some(7));
    assert_eq!(storage.remove(position), None);
    assert_eq!(storage.len(), 1);
    storage.clear();
    assert!(storage.is_empty());
}

#[test]
fn test_hex_hash_storage_should_iterate_over_positions_and_hexes() {
    let mut storage = HexHashStorage::new();
    for (q, r, value) in [(12, -42, 93), (-5, 24, 7), (12, -42, 42), (0, 0, 1)].iter() {
        storage.insert(HexCoordinate::from_axial(*q, *r), *value);
    }
    assert_eq!(
        storage
            .iter()
            .map(|(position, value)| (position, *value))
            .collect::<HashSet<_>>(),
        hashset![
            (HexCoordinate::from_axial(12, -42), 42),
            (HexCoordinate::from_axial(-5, 24), 7),
            (HexCoordinate::default(), 1),
        ]
    );
    assert_eq!(
        storage.positions().collect::<HashSet<_>>(),
        hashset![
            HexCoordinate::from_axial(12, -42),
            HexCoordinate::from_axial(-5, 24),
            HexCoordinate::default(),
        ]
    );
    for (_, value) in storage.iter_mut() {
        *value *= 2;
    }
    assert_eq!(
        storage.hexes().cloned().collect::<HashSet<_>>(),
        hashset![84, 14, 2]
    );
}

#[test]
fn test_hex_hash_storage_neighbors() {
    let mut storage = HexHashStorage::new();
    let center = HexCoordinate::default();
    for position in center.range(1) {
        storage.insert(position, ());
    }
    storage.remove(center.from_ring(1, 0));
    assert_eq!(storage.degree(center), 5);
    assert_eq!(storage.degree(center.from_ring(1, 3)), 3);
    assert_eq!(
        storage.neighbors(center.from_ring(1, 1)).collect::<HashSet<_>>(),
        hashset![center, center.from_ring(1, 2)]
    );
}

#[test]
fn test_hex_hash_storage_edges() {
    let mut storage = HexHashStorage::new();
    for position in HexCoordinate::default().range(1) {
        storage.insert(position, ());
    }
    let edges = storage.edges().collect::<Vec<_>>();
    // Six spokes and six rim edges.
    assert_eq!(edges.len(), 12);
    assert_eq!(
        edges
            .iter()
            .map(|(a, b)| if a < b { (*a, *b) } else { (*b, *a) })
            .collect::<HashSet<_>>()
            .len(),
        12
    );
    assert!(edges.iter().all(|(a, b)| a.distance(*b) == 1));
}
