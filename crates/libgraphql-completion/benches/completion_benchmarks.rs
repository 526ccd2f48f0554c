mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_completion::completion::CompletionProvider;
use libgraphql_completion::completion::CompletionRequest;
use libgraphql_completion::completion::ContextResolver;
use libgraphql_completion::completion::CursorPosition;
use libgraphql_completion::schema::Schema;
use libgraphql_completion::schema::SchemaBuilder;
use libgraphql_completion::token::GraphQLToken;
use libgraphql_completion::token_source::StrGraphQLTokenSource;

fn build_schema(type_count: usize) -> Schema {
    SchemaBuilder::new()
        .load_str(None, &fixtures::chained_schema(type_count))
        .expect("benchmark schema parses")
        .build()
        .expect("benchmark schema builds")
}

// ─── Group 1: Schema Loading ─────────────────────────────

fn schema_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_build");

    for type_count in [10, 100, 500] {
        let sdl = fixtures::chained_schema(type_count);
        group.throughput(Throughput::Bytes(sdl.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &sdl,
            |b, sdl| {
                b.iter(|| {
                    let builder = SchemaBuilder::new()
                        .load_str(None, sdl.as_str())
                        .expect("benchmark schema parses");
                    black_box(builder.build())
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Context Resolution ─────────────────────────

fn context_resolution(c: &mut Criterion) {
    let schema = build_schema(100);
    let resolver = ContextResolver::new(&schema);
    let mut group = c.benchmark_group("context_resolution");

    for depth in [5, 25, 75] {
        let (text, line, column) = fixtures::nested_query(depth);
        let tokens: Vec<GraphQLToken<'_>> =
            StrGraphQLTokenSource::new(text.as_str()).collect();
        let cursor = CursorPosition::new(line, column);
        group.bench_with_input(
            BenchmarkId::new("nested_depth", depth),
            &tokens,
            |b, tokens| {
                b.iter(|| black_box(resolver.resolve(tokens.as_slice(), cursor)))
            },
        );
    }

    group.finish();
}

// ─── Group 3: End-to-end Completion ──────────────────────

fn end_to_end(c: &mut Criterion) {
    let schema = build_schema(100);
    let provider = CompletionProvider::new(&schema);
    let mut group = c.benchmark_group("complete");

    let (text, line, column) = fixtures::nested_query(25);
    let nested = CompletionRequest::new(
        "nested.graphql",
        text,
        CursorPosition::new(line, column),
    );
    group.bench_function("nested_depth_25", |b| {
        b.iter(|| black_box(provider.complete(&nested)))
    });

    let (text, line, column) = fixtures::many_operations(50);
    group.throughput(Throughput::Bytes(text.len() as u64));
    let many_ops = CompletionRequest::new(
        "many.graphql",
        text,
        CursorPosition::new(line, column),
    );
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(provider.complete(&many_ops)))
    });

    group.finish();
}

criterion_group!(benches, schema_build, context_resolution, end_to_end);
criterion_main!(benches);
