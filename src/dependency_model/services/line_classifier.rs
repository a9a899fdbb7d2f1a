/// Keywords recognized in the `yum info` report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    Name,
    Arch,
    Version,
    Release,
    Repo,
    Summary,
}

impl InfoField {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Name" => Some(InfoField::Name),
            "Arch" => Some(InfoField::Arch),
            "Version" => Some(InfoField::Version),
            "Release" => Some(InfoField::Release),
            "Repo" => Some(InfoField::Repo),
            "Summary" => Some(InfoField::Summary),
            _ => None,
        }
    }
}

/// A recognized `Key: value` line of the info report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine<'a> {
    pub field: InfoField,
    pub value: &'a str,
}

/// A recognized line of the dependency report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepLine<'a> {
    Package {
        name: &'a str,
        version: Option<&'a str>,
    },
    Dependency {
        name: &'a str,
    },
    Provider {
        name: &'a str,
        version: Option<&'a str>,
    },
}

/// Classifies one line of the info report.
///
/// The line is split on its first `:`; the trimmed key must be one of the six
/// field keywords. The value is everything after the colon, trimmed.
/// Anything else yields `None`.
pub fn classify_info_line(line: &str) -> Option<InfoLine<'_>> {
    let (key, value) = line.split_once(':')?;
    let field = InfoField::from_keyword(key.trim())?;
    Some(InfoLine {
        field,
        value: value.trim(),
    })
}

/// Classifies one line of the dependency report.
///
/// Tokens are whitespace separated; the first must be `package:`,
/// `dependency:` or `provider:` followed by at least a name token.
pub fn classify_dep_line(line: &str) -> Option<DepLine<'_>> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;
    let name = tokens.next();
    let third = tokens.next();

    match keyword {
        "package:" => Some(DepLine::Package {
            name: name?,
            version: third,
        }),
        "dependency:" => Some(DepLine::Dependency { name: name? }),
        "provider:" => Some(DepLine::Provider {
            name: name?,
            version: third,
        }),
        _ => None,
    }
}
