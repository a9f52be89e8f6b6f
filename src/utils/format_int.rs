/// Integer printed with `'` between groups of three digits.
pub struct NiceInt(u64);

impl NiceInt {
    pub fn from(value: impl Into<u64>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let lead = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && i % 3 == lead {
                write!(f, "'")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0u64).to_string(), "0");
        assert_eq!(NiceInt::from(999u32).to_string(), "999");
        assert_eq!(NiceInt::from(1000u32).to_string(), "1'000");
        assert_eq!(NiceInt::from_usize(1_048_576).to_string(), "1'048'576");
        assert_eq!(NiceInt::from(123_456u64).to_string(), "123'456");
    }
}
