//! Positional decomposition of file names
//!
//! The grammar checks are layered on top of these splits, so all offset
//! arithmetic lives here. Splitting never fails: a segment that runs past the
//! end of the input is simply shorter than asked for (possibly empty), and the
//! semantic checks report the mismatch.

/// Width of the `YYYY-MM-DD` date that opens dated file names
pub const DATE_WIDTH: usize = 10;

/// A file name split at its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitFileName<'a> {
    /// Everything before the extension
    pub stem: &'a str,
    /// The extension including its dot, or empty
    pub extension: &'a str,
}

impl<'a> SplitFileName<'a> {
    /// Splits at the last dot
    ///
    /// Leading dots do not start an extension, so `.txt` has an empty
    /// extension, and a dot followed by a path separator is not an
    /// extension either.
    ///
    /// ```
    /// use article_grammar::SplitFileName;
    ///
    /// let split = SplitFileName::split("checkpoint_0.txt");
    /// assert_eq!(split.stem, "checkpoint_0");
    /// assert_eq!(split.extension, ".txt");
    ///
    /// assert_eq!(SplitFileName::split(".txt").extension, "");
    /// assert_eq!(SplitFileName::split("archive.tar.gz").extension, ".gz");
    /// ```
    pub fn split(file_name: &'a str) -> Self {
        let no_extension = Self {
            stem: file_name,
            extension: "",
        };

        let Some(dot) = file_name.rfind('.') else {
            return no_extension;
        };
        let (stem, extension) = file_name.split_at(dot);
        if stem.chars().all(|c| c == '.') || extension.contains('/') {
            return no_extension;
        }

        Self { stem, extension }
    }
}

/// The segments of a dated file name stem
///
/// Layout: `<date><separator><middle><joiner><remainder>`, where the date is
/// [`DATE_WIDTH`] chars, the separator one char, and the middle and joiner
/// widths are chosen by the caller (an author name and `_` for articles, a
/// datafeed name and `_article_` for datafeed articles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedSegments<'a> {
    /// Leading date
    pub date: &'a str,
    /// Char after the date, if any
    pub separator: Option<char>,
    /// Author name or datafeed name
    pub middle: &'a str,
    /// Literal between the middle and the remainder
    pub joiner: &'a str,
    /// Char offset at which the joiner starts
    pub joiner_offset: usize,
    /// Everything after the joiner
    pub remainder: &'a str,
}

impl<'a> DatedSegments<'a> {
    /// Splits `stem` with a middle of `middle_width` chars and a joiner of
    /// `joiner_width` chars
    pub fn split(stem: &'a str, middle_width: usize, joiner_width: usize) -> Self {
        let mut cursor = Cursor::new(stem);
        let date = cursor.take(DATE_WIDTH);
        let separator = cursor.take(1).chars().next();
        let middle = cursor.take(middle_width);
        let joiner_offset = cursor.offset;
        let joiner = cursor.take(joiner_width);

        Self {
            date,
            separator,
            middle,
            joiner,
            joiner_offset,
            remainder: cursor.rest,
        }
    }
}

/// The section of a datafeed file name after `_article_`
///
/// Layout: `<article_id>_<child stem>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatafeedSection<'a> {
    /// Sequence id of the embedded article (not yet validated)
    pub article_id: &'a str,
    /// Stem of the embedded article's file name
    pub child_stem: &'a str,
}

impl<'a> DatafeedSection<'a> {
    /// Splits at the first underscore; `None` when there is none
    pub fn split(section: &'a str) -> Option<Self> {
        let (article_id, child_stem) = section.split_once('_')?;
        Some(Self {
            article_id,
            child_stem,
        })
    }
}

/// Char-counting reader over a string
struct Cursor<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            offset: 0,
        }
    }

    /// Takes up to `n` chars
    fn take(&mut self, n: usize) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .nth(n)
            .map_or(self.rest.len(), |(i, _)| i);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        self.offset += head.chars().count();
        head
    }
}
