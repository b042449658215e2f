//! SQL language pack (T-SQL flavored keyword set)

use super::{WHITESPACE_CHARS, WHITESPACE_PATTERN};
use crate::error::Error;
use crate::pattern::Pattern;
use crate::registry::Registry;
use crate::style::StyleTag;
use crate::table::TableBuilder;

/// Register the SQL table under `sql` / `.sql`.
pub fn register(registry: &mut Registry) -> Result<(), Error> {
    let table = TableBuilder::new()
        // Whitespace
        .shortcut(
            Pattern::regex(StyleTag::Plain, WHITESPACE_PATTERN)?.leading(WHITESPACE_CHARS),
        )
        // A double or single quoted, possibly multi-line, string
        .shortcut(
            Pattern::regex(
                StyleTag::Str,
                r#"^(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#,
            )?
            .leading("\"'"),
        )
        // A comment is either a line comment that starts with two dashes,
        // or a C-style block comment
        .fallthrough(Pattern::regex(
            StyleTag::Comment,
            r"^(?:--[^\r\n]*|/\*[\s\S]*?(?:\*/|$))",
        )?)
        .fallthrough(Pattern::regex(
            StyleTag::Keyword,
            r"(?i)^(?:ADD|ALL|ALTER|AND|ANY|APPLY|AS|ASC|AUTHORIZATION|BACKUP|BEGIN|BETWEEN|BREAK|BROWSE|BULK|BY|CASCADE|CASE|CHECK|CHECKPOINT|CLOSE|CLUSTERED|COALESCE|COLLATE|COLUMN|COMMIT|COMPUTE|CONNECT|CONSTRAINT|CONTAINS|CONTAINSTABLE|CONTINUE|CONVERT|CREATE|CROSS|CURRENT|CURRENT_DATE|CURRENT_TIME|CURRENT_TIMESTAMP|CURRENT_USER|CURSOR|DATABASE|DBCC|DEALLOCATE|DECLARE|DEFAULT|DELETE|DENY|DESC|DISK|DISTINCT|DISTRIBUTED|DOUBLE|DROP|DUMMY|DUMP|ELSE|END|ERRLVL|ESCAPE|EXCEPT|EXEC|EXECUTE|EXISTS|EXIT|FETCH|FILE|FILLFACTOR|FOLLOWING|FOR|FOREIGN|FREETEXT|FREETEXTTABLE|FROM|FULL|FUNCTION|GOTO|GRANT|GROUP|HAVING|HOLDLOCK|IDENTITY|IDENTITYCOL|IDENTITY_INSERT|IF|IN|INDEX|INNER|INSERT|INTERSECT|INTO|IS|JOIN|KEY|KILL|LEFT|LIKE|LINENO|LOAD|MATCH|MERGE|NATIONAL|NOCHECK|NONCLUSTERED|NOT|NULL|NULLIF|OF|OFF|OFFSETS|ON|OPEN|OPENDATASOURCE|OPENQUERY|OPENROWSET|OPENXML|OPTION|OR|ORDER|OUTER|OVER|PERCENT|PLAN|PRECEDING|PRECISION|PRIMARY|PRINT|PROC|PROCEDURE|PUBLIC|RAISERROR|READ|READTEXT|RECONFIGURE|REFERENCES|REPLICATION|RESTORE|RESTRICT|RETURN|REVOKE|RIGHT|ROLLBACK|ROWCOUNT|ROWGUIDCOL|ROWS?|RULE|SAVE|SCHEMA|SELECT|SESSION_USER|SET|SETUSER|SHUTDOWN|SOME|STATISTICS|SYSTEM_USER|TABLE|TEXTSIZE|THEN|TO|TOP|TRAN|TRANSACTION|TRIGGER|TRUNCATE|TSEQUAL|UNBOUNDED|UNION|UNIQUE|UPDATE|UPDATETEXT|USE|USER|USING|VALUES|VARYING|VIEW|WAITFOR|WHEN|WHERE|WHILE|WITH|WRITETEXT)\b",
        )?)
        // A number is a hex integer literal, a decimal real literal, or in
        // scientific notation
        .fallthrough(Pattern::regex(
            StyleTag::Literal,
            r"(?i)^[+-]?(?:0x[\da-f]+|(?:(?:\.\d+|\d+(?:\.\d*)?)(?:e[+\-]?\d+)?))",
        )?)
        // An identifier
        .fallthrough(Pattern::regex(StyleTag::Plain, r"(?i)^[a-z_][\w-]*")?)
        // A run of punctuation
        .fallthrough(Pattern::regex(
            StyleTag::Punctuation,
            r#"^[^\w\t\n\r \xA0"'][^\w\t\n\r \xA0+\-"']*"#,
        )?)
        .build();

    registry.register("sql", &["sql"], table)
}
