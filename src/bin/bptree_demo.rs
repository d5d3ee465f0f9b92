//! Walk through the index operations on small trees, printing the node
//! structure and the leaf chain after each step. Run with RUST_LOG=trace
//! to see the structural events (splits, borrows, merges) as they
//! happen.

use tunebase::BPlusTree;

fn dump_chain<V: std::fmt::Debug>(tree: &BPlusTree<i32, V>) {
    for leaf in tree.leaves() {
        print!("[");
        for (key, value) in leaf.entries() {
            print!(" {}: {:?}", key, value);
        }
        print!(" ] -> ");
    }
    println!("end");
}

fn main() {
    env_logger::init();

    println!("B+ tree demo (fanout 3)");
    println!("=======================");

    let mut ratings: BPlusTree<i32, &str> = BPlusTree::with_order(3);
    for (song, rating) in [
        (10, "apple"),
        (20, "banana"),
        (5, "orange"),
        (15, "grape"),
        (25, "melon"),
        (30, "peach"),
    ] {
        ratings.insert(song, rating);
    }

    println!("\nstructure after six insertions:");
    ratings.print();
    println!("leaf chain:");
    dump_chain(&ratings);

    println!("\nsearch 15 -> {:?}", ratings.search(&15));
    println!("search 100 -> {:?}", ratings.search(&100));

    println!("\nentries in [10, 25]:");
    for (key, value) in ratings.range(&10, &25) {
        println!("  {}: {}", key, value);
    }

    ratings.remove(&10);
    println!("\nafter removing 10:");
    dump_chain(&ratings);

    ratings.remove(&5);
    println!("after removing 5 (forces a merge):");
    dump_chain(&ratings);
    ratings.print();

    println!("\nstring keys");
    println!("===========");
    let mut titles: BPlusTree<String, u32> = BPlusTree::with_order(3);
    titles.insert("gamma".to_string(), 300);
    titles.insert("alpha".to_string(), 100);
    titles.insert("beta".to_string(), 200);
    titles.insert("delta".to_string(), 400);

    for (title, score) in titles.iter() {
        println!("  {}: {}", title, score);
    }
}
