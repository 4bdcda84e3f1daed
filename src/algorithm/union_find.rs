//! 并查集
//!
//! 按秩合并 + 路径压缩，元素为顶点下标。Kruskal 用它判断加边是否成环。

/// 并查集
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// 创建 n 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 查找 x 所在集合的代表元，并压缩经过的路径。
    ///
    /// # Panics
    ///
    /// x 未注册时 panic。
    pub fn find(&mut self, x: usize) -> usize {
        self.assert_registered(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = x;
        while self.parent[curr] != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// 合并 x 和 y 所在的集合。已在同一集合时返回 false。
    ///
    /// # Panics
    ///
    /// x 或 y 未注册时 panic。
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        true
    }

    /// x 和 y 是否在同一集合
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    fn assert_registered(&self, x: usize) {
        assert!(
            x < self.parent.len(),
            "并查集中不存在元素 {} (共 {} 个元素)",
            x,
            self.parent.len()
        );
    }
}
