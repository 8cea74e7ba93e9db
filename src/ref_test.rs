// Reference model for Llrb, keys index directly into a vector.
struct RefNodes {
    entries: Vec<Option<(i64, i64)>>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        RefNodes {
            entries: vec![None; capacity],
        }
    }

    fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    fn get(&self, key: i64) -> Option<(i64, i64)> {
        self.entries.get(key as usize).cloned().flatten()
    }

    fn replace_or_insert(&mut self, key: i64, value: i64) -> Option<(i64, i64)> {
        self.entries[key as usize].replace((key, value))
    }

    fn delete(&mut self, key: i64) -> Option<(i64, i64)> {
        self.entries.get_mut(key as usize).and_then(Option::take)
    }

    fn min(&self) -> Option<(i64, i64)> {
        self.entries.iter().find_map(|e| *e)
    }

    fn max(&self) -> Option<(i64, i64)> {
        self.entries.iter().rev().find_map(|e| *e)
    }

    fn delete_min(&mut self) -> Option<(i64, i64)> {
        self.entries.iter_mut().find(|e| e.is_some())?.take()
    }

    fn delete_max(&mut self) -> Option<(i64, i64)> {
        self.entries.iter_mut().rev().find(|e| e.is_some())?.take()
    }

    fn iter(&self) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .filter_map(|e| *e)
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }
}
