/// A schema of `type_count` object types chained together: `Type{n}` has a
/// `next` field returning `Type{n+1}`, a handful of scalar fields, and a
/// `search` field taking an input object argument.
pub fn chained_schema(type_count: usize) -> String {
    let mut sdl = String::from(
        "type Query {\n  root: Type0\n}\n\n\
         input SearchInput {\n  term: String\n  limit: Int\n  offset: Int\n}\n\n",
    );
    for i in 0..type_count {
        sdl.push_str(&format!("type Type{i} {{\n"));
        if i + 1 < type_count {
            sdl.push_str(&format!("  next: Type{}\n", i + 1));
        }
        for field in ["id: ID!", "name: String", "count: Int", "score: Float"] {
            sdl.push_str(&format!("  {field}\n"));
        }
        sdl.push_str(&format!("  search(input: SearchInput): [Type{i}!]!\n}}\n\n"));
    }
    sdl
}

/// A query that descends `depth` levels through `next` and stops with the
/// cursor inside the innermost selection set. Returns the text and the
/// cursor's `(line, column)`.
pub fn nested_query(depth: usize) -> (String, usize, usize) {
    let mut text = String::from("query Nested($limit: Int) {\n  root {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 2);
        text.push_str(&format!("{indent}id\n{indent}name\n{indent}next {{\n"));
    }
    let indent = "  ".repeat(depth + 2);
    text.push_str(&format!("{indent}na"));
    let line = text.matches('\n').count();
    let column = indent.len() + 2;
    text.push('\n');
    (text, line, column)
}

/// `operation_count` small operations followed by an argument list holding
/// the cursor.
pub fn many_operations(operation_count: usize) -> (String, usize, usize) {
    let mut text = String::new();
    for i in 0..operation_count {
        text.push_str(&format!(
            "query Op{i}($limit: Int) {{ root {{ search(input: {{ limit: $limit }}) {{ id name }} }} }}\n",
        ));
    }
    let last_line = "{ root { search(";
    text.push_str(last_line);
    (text, operation_count, last_line.len())
}
