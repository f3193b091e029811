/// Hands out short alphabetic tokens in allocation order: `a`..`z`,
/// then `aa`, `ab`, .. — bijective base-26, no zero digit, so the
/// successor of `z` is `aa` and of `zz` is `aaa`.
#[derive(Debug, Default)]
pub struct TokenAllocator {
    pos: usize,
}

impl TokenAllocator {
    pub fn new() -> Self {
        Self { pos: 0 }
    }

    /// Number of tokens handed out so far.
    pub fn allocated(&self) -> usize {
        self.pos
    }

    fn ident(&self) -> String {
        // 1-based: decrement before every modulo/divide step, otherwise
        // the sequence picks up a spurious leading digit after "z".
        let mut n = self.pos + 1;
        let mut r = Vec::new();

        while n > 0 {
            n -= 1;
            r.push(b'a' + (n % 26) as u8);
            n /= 26;
        }

        r.reverse();
        r.into_iter().map(char::from).collect()
    }

    pub fn alloc(&mut self) -> String {
        let s = self.ident();
        self.pos += 1;
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nth(n: usize) -> String {
        let mut token = TokenAllocator::new();
        (0..n).map(|_| token.alloc()).last().unwrap()
    }

    #[test]
    fn ident_alloc() {
        let mut token = TokenAllocator::new();

        let v = (0..30).map(|_| token.alloc()).collect::<Vec<_>>();

        assert_eq!(v[0], "a");
        assert_eq!(v[1], "b");
        assert_eq!(v[25], "z");
        assert_eq!(v[26], "aa");
        assert_eq!(v[27], "ab");
        assert_eq!(token.allocated(), 30);
    }

    #[test]
    fn ident_alloc_boundaries() {
        assert_eq!(nth(1), "a");
        assert_eq!(nth(26), "z");
        assert_eq!(nth(27), "aa");
        assert_eq!(nth(52), "az");
        assert_eq!(nth(53), "ba");
        assert_eq!(nth(702), "zz");
        assert_eq!(nth(703), "aaa");
    }
}
