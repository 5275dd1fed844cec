use std::fmt;

/// Reference genome builds the tree sources carry coordinates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenomeBuild {
    GRCh38,
    GRCh37,
    CHM13v2,
}

impl GenomeBuild {
    pub fn name(&self) -> &'static str {
        match self {
            GenomeBuild::GRCh38 => "GRCh38",
            GenomeBuild::GRCh37 => "GRCh37",
            GenomeBuild::CHM13v2 => "T2T-CHM13v2.0",
        }
    }

    /// Parse a build name as given on the command line. Accepts the common
    /// UCSC aliases alongside the canonical assembly names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GRCh38" | "hg38" => Some(GenomeBuild::GRCh38),
            "GRCh37" | "hg19" => Some(GenomeBuild::GRCh37),
            "T2T-CHM13v2.0" | "CHM13" | "chm13" | "hs1" => Some(GenomeBuild::CHM13v2),
            _ => None,
        }
    }

    /// Coordinate-map keys that resolve to this build in a tree payload.
    /// Sources key marker coordinates either by build name or by sequence
    /// accession; the mitochondrial rCRS coordinates (J01415.2) are shared
    /// across builds.
    pub(crate) fn coordinate_keys(&self) -> &'static [&'static str] {
        match self {
            GenomeBuild::GRCh38 => &["GRCh38", "CM000686.2", "NC_000024.10", "rCRS", "J01415.2"],
            GenomeBuild::GRCh37 => &["GRCh37", "CM000686.1", "NC_000024.9", "rCRS", "J01415.2"],
            GenomeBuild::CHM13v2 => &[
                "T2T-CHM13v2.0",
                "CP086569.2",
                "NC_060948.1",
                "rCRS",
                "J01415.2",
            ],
        }
    }
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_aliases_parse() {
        assert_eq!(GenomeBuild::from_name("hg38"), Some(GenomeBuild::GRCh38));
        assert_eq!(GenomeBuild::from_name("hs1"), Some(GenomeBuild::CHM13v2));
        assert_eq!(GenomeBuild::from_name("GRCh37"), Some(GenomeBuild::GRCh37));
        assert_eq!(GenomeBuild::from_name("hg42"), None);
    }

    #[test]
    fn coordinate_keys_cover_accessions() {
        assert!(GenomeBuild::GRCh38.coordinate_keys().contains(&"CM000686.2"));
        assert!(GenomeBuild::CHM13v2.coordinate_keys().contains(&"CP086569.2"));
        // rCRS applies everywhere
        for build in [GenomeBuild::GRCh38, GenomeBuild::GRCh37, GenomeBuild::CHM13v2] {
            assert!(build.coordinate_keys().contains(&"J01415.2"));
        }
    }
}
