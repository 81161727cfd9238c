use inner::doc_inline_reexport;

doc_inline_reexport! {
    linked_seq,
    sorted_linked_seq,
}
