use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed pool of bot names, each handed out at most once until released
#[derive(Debug, Clone)]
pub struct NamePool {
    names: Vec<String>,
    taken: Vec<bool>,
}

impl NamePool {
    pub fn new(names: Vec<String>) -> Self {
        let taken = vec![false; names.len()];
        Self { names, taken }
    }

    /// Pick a uniformly random name that is not taken yet
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        let free: Vec<usize> = (0..self.names.len())
            .filter(|&index| !self.taken[index])
            .collect();
        let &index = free.choose(rng)?;
        self.taken[index] = true;
        Some(self.names[index].clone())
    }

    pub fn release_all(&mut self) {
        self.taken.iter_mut().for_each(|taken| *taken = false);
    }

    pub fn available(&self) -> usize {
        self.taken.iter().filter(|taken| !**taken).count()
    }
}
